//! Catalog search - fuzzy name ranking with department fallback

use shopfront_core::{Category, ProductRecord};
use tracing::debug;

use crate::query::{MatchKind, ScoredCandidate, SearchOutcome, SearchQuery};
use crate::similarity::similarity;

/// Minimum name score for a strong match (inclusive)
pub const STRONG_MATCH_THRESHOLD: f64 = 0.6;

/// Search `catalog` for `query` within `category`
///
/// Never returns an empty list for a non-empty department: when nothing
/// matches, the department itself is returned.
pub fn search<'a>(catalog: &'a [ProductRecord], query: &str, category: Category) -> Vec<&'a ProductRecord> {
    let query = SearchQuery::new(query).with_category(category);
    search_with_outcome(catalog, &query).products
}

/// Same as [`search`], reporting how the list was produced
pub fn search_with_outcome<'a>(catalog: &'a [ProductRecord], query: &SearchQuery) -> SearchOutcome<'a> {
    let mut outcome = run(catalog, query.query.trim(), query.category);
    if let Some(limit) = query.limit {
        outcome.products.truncate(limit);
    }

    debug!(
        "Search {:?} in {:?}: {:?}, {} result(s)",
        query.query,
        query.category,
        outcome.kind,
        outcome.products.len()
    );
    outcome
}

fn run<'a>(catalog: &'a [ProductRecord], query: &str, category: Category) -> SearchOutcome<'a> {
    if query.is_empty() {
        return SearchOutcome {
            kind: MatchKind::Browse,
            products: in_department(catalog, category),
        };
    }

    let products: Vec<&ProductRecord> = rank(catalog, query)
        .into_iter()
        .filter(|p| p.category.matches(category))
        .collect();

    if products.is_empty() {
        SearchOutcome {
            kind: MatchKind::Fallback,
            products: in_department(catalog, category),
        }
    } else {
        SearchOutcome {
            kind: MatchKind::Matched,
            products,
        }
    }
}

/// Score every product and order strong matches before keyword matches
fn rank<'a>(catalog: &'a [ProductRecord], query: &str) -> Vec<&'a ProductRecord> {
    let scored: Vec<ScoredCandidate<'a>> = catalog
        .iter()
        .map(|product| ScoredCandidate {
            product,
            score: similarity(&product.name, query),
        })
        .collect();

    let lowered = query.to_lowercase();
    let keywords: Vec<&str> = lowered.split_whitespace().collect();

    let (mut strong, weak): (Vec<_>, Vec<_>) = scored
        .into_iter()
        .partition(|c| c.score >= STRONG_MATCH_THRESHOLD);

    // Vec::sort_by is stable, so equal scores keep catalog order
    strong.sort_by(|a, b| b.score.total_cmp(&a.score));

    let keyword_matches = weak.into_iter().filter(|c| {
        let name = c.product.name.to_lowercase();
        keywords.iter().any(|k| name.contains(k))
    });

    strong
        .into_iter()
        .chain(keyword_matches)
        .map(|c| c.product)
        .collect()
}

fn in_department(catalog: &[ProductRecord], category: Category) -> Vec<&ProductRecord> {
    catalog
        .iter()
        .filter(|p| p.category.matches(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::ProductId;

    fn product(id: i64, name: &str, category: Category) -> ProductRecord {
        ProductRecord {
            id: ProductId(id),
            name: name.to_string(),
            category,
            price: 100,
            mrp: 150,
            description: String::new(),
            image: format!("{}.jpg", id),
            additional_images: Vec::new(),
            youtube_id: String::new(),
            rating: None,
            review_count: None,
            is_best_seller: None,
        }
    }

    fn catalog() -> Vec<ProductRecord> {
        vec![
            product(1, "Vegetable Chopper", Category::Kitchen),
            product(2, "Steel Water Bottle", Category::Kitchen),
            product(3, "Mini Fan", Category::Gadgets),
            product(4, "LED Desk Lamp", Category::Gadgets),
            product(5, "Masala Peanuts", Category::Snacks),
            product(6, "Floor Cleaning Mop", Category::Household),
            product(7, "Mystery Box", Category::All),
        ]
    }

    fn ids(products: &[&ProductRecord]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_empty_query_browses_in_order() {
        let catalog = catalog();
        let all = search(&catalog, "   ", Category::All);
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7]);

        let kitchen = search(&catalog, "", Category::Kitchen);
        assert_eq!(ids(&kitchen), vec![1, 2]);
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let catalog = catalog();
        let results = search(&catalog, "mini fan", Category::All);
        assert_eq!(results[0].id, ProductId(3));
    }

    #[test]
    fn test_typo_is_strong_match() {
        let catalog = catalog();
        let outcome = search_with_outcome(&catalog, &SearchQuery::new("Vegetable Choper"));
        assert_eq!(outcome.kind, MatchKind::Matched);
        assert_eq!(outcome.products[0].id, ProductId(1));
    }

    #[test]
    fn test_strong_before_keyword() {
        let catalog = vec![
            product(1, "Lamp Oil Refill", Category::Household),
            product(2, "Desk Lamp", Category::Gadgets),
        ];
        let results = search(&catalog, "desk lamp", Category::All);
        assert_eq!(ids(&results), vec![2, 1]);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = vec![
            product(1, "Steel Lamp Stand", Category::Household),
            product(2, "Lamp", Category::Gadgets),
            product(3, "Desk Lamp", Category::Gadgets),
        ];
        // "lamp" is contained in every name, so all three score 0.9 except
        // the exact match at 1.0; ties keep catalog order
        let results = search(&catalog, "lamp", Category::All);
        assert_eq!(ids(&results), vec![2, 1, 3]);
    }

    #[test]
    fn test_keyword_matches_follow_in_catalog_order() {
        let catalog = catalog();
        // Neither name is close to the full query, but both share a token
        let results = search(&catalog, "steel floor polish", Category::All);
        assert_eq!(ids(&results), vec![2, 6]);
    }

    #[test]
    fn test_keyword_never_duplicates_strong() {
        let catalog = catalog();
        let results = search(&catalog, "peanuts", Category::All);
        assert_eq!(ids(&results), vec![5]);
    }

    #[test]
    fn test_double_space_does_not_match_everything() {
        let catalog = catalog();
        let outcome = search_with_outcome(&catalog, &SearchQuery::new("zzzz  qqqq"));
        assert_eq!(outcome.kind, MatchKind::Fallback);
    }

    #[test]
    fn test_category_filter_applies_to_matches() {
        let catalog = catalog();
        let results = search(&catalog, "lamp", Category::Gadgets);
        assert_eq!(ids(&results), vec![4]);
    }

    #[test]
    fn test_no_match_falls_back_to_department() {
        let catalog = catalog();
        let outcome = search_with_outcome(
            &catalog,
            &SearchQuery::new("xylophone").with_category(Category::Kitchen),
        );
        assert!(outcome.is_fallback());
        assert_eq!(ids(&outcome.products), vec![1, 2]);
    }

    #[test]
    fn test_match_outside_department_falls_back() {
        let catalog = catalog();
        // "Mini Fan" matches, but not in Snacks
        let results = search(&catalog, "mini fan", Category::Snacks);
        assert_eq!(ids(&results), vec![5]);
    }

    #[test]
    fn test_no_match_all_returns_whole_catalog() {
        let catalog = catalog();
        let results = search(&catalog, "qqqqqqqq", Category::All);
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn test_uncategorised_only_visible_under_all() {
        let catalog = catalog();
        assert!(search(&catalog, "mystery box", Category::All)
            .iter()
            .any(|p| p.id == ProductId(7)));
        for category in [Category::Gadgets, Category::Kitchen, Category::Household, Category::Snacks] {
            assert!(search(&catalog, "mystery box", category)
                .iter()
                .all(|p| p.id != ProductId(7)));
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<ProductRecord> = Vec::new();
        assert!(search(&catalog, "", Category::All).is_empty());
        assert!(search(&catalog, "fan", Category::Kitchen).is_empty());
        let outcome = search_with_outcome(&catalog, &SearchQuery::new("fan"));
        assert_eq!(outcome.kind, MatchKind::Fallback);
    }

    #[test]
    fn test_limit_truncates_after_ranking() {
        let catalog = catalog();
        let outcome = search_with_outcome(&catalog, &SearchQuery::browse(Category::All).with_limit(3));
        assert_eq!(ids(&outcome.products), vec![1, 2, 3]);
    }
}

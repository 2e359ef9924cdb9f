//! Ingredient-based suggestion engine
//!
//! Ranks catalog meals by how many of the user's ingredient tokens
//! fuzzy-match the meal's ingredient list. Matching is case-insensitive
//! symmetric substring: the input may contain the catalog token or the
//! catalog token may contain the input. Short tokens therefore match
//! broadly; that is the intended behavior, not an edge case to tighten.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::domain::MealType;

/// Meals returned for an empty (or fully unmatched) ingredient set
pub const RANDOM_SAMPLE_SIZE: usize = 6;

/// Maximum ranked matches returned for a non-empty ingredient set
pub const MAX_MATCHES: usize = 8;

/// One ranked suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct MealMatch {
    /// Meal name
    pub name: String,

    /// Meal description
    pub description: String,

    /// The meal's full ingredient token list
    pub ingredients: Vec<String>,

    /// Catalog category the meal belongs to
    pub category: MealType,

    /// Number of distinct input ingredients that matched (0 for random samples)
    pub match_count: usize,

    /// The input ingredients that matched, in input order
    pub matched_ingredients: Vec<String>,
}

/// Suggestion engine over a fixed catalog
pub struct SuggestionEngine {
    catalog: Catalog,
}

impl SuggestionEngine {
    /// Create an engine over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Create an engine over the builtin catalog
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }

    /// The engine's catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Suggest meals for the given ingredients using the thread-local RNG
    pub fn suggest(&self, ingredients: &[String]) -> Vec<MealMatch> {
        self.suggest_with(ingredients, &mut rand::rng())
    }

    /// Suggest meals for the given ingredients
    ///
    /// Empty input returns a random sample of [`RANDOM_SAMPLE_SIZE`] distinct
    /// meals. Non-empty input ranks every catalog meal by match count,
    /// descending, ties broken by catalog iteration order, truncated to
    /// [`MAX_MATCHES`]. When nothing matches, falls back to the random sample.
    pub fn suggest_with<R: Rng + ?Sized>(&self, ingredients: &[String], rng: &mut R) -> Vec<MealMatch> {
        if ingredients.is_empty() {
            return self.random_sample(RANDOM_SAMPLE_SIZE, rng);
        }

        let mut matches = Vec::new();
        for (category, meal) in self.catalog.iter() {
            // Distinct input tokens that fuzzy-match any catalog token,
            // collected in input order
            let mut matched: Vec<String> = Vec::new();
            for ingredient in ingredients {
                if matched.iter().any(|m| m == ingredient) {
                    continue;
                }
                if meal.ingredients.iter().any(|token| fuzzy_match(token, ingredient)) {
                    matched.push(ingredient.clone());
                }
            }

            if !matched.is_empty() {
                matches.push(MealMatch {
                    name: meal.name.clone(),
                    description: meal.description.clone(),
                    ingredients: meal.ingredients.clone(),
                    category,
                    match_count: matched.len(),
                    matched_ingredients: matched,
                });
            }
        }

        if matches.is_empty() {
            return self.random_sample(RANDOM_SAMPLE_SIZE, rng);
        }

        // Stable sort keeps catalog iteration order within equal counts
        matches.sort_by(|a, b| b.match_count.cmp(&a.match_count));
        matches.truncate(MAX_MATCHES);
        matches
    }

    fn random_sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<MealMatch> {
        let mut all: Vec<MealMatch> = self
            .catalog
            .iter()
            .map(|(category, meal)| MealMatch {
                name: meal.name.clone(),
                description: meal.description.clone(),
                ingredients: meal.ingredients.clone(),
                category,
                match_count: 0,
                matched_ingredients: Vec::new(),
            })
            .collect();

        all.shuffle(rng);
        all.truncate(count);
        all
    }
}

/// Case-insensitive symmetric substring match between one catalog token
/// and one input ingredient
fn fuzzy_match(token: &str, input: &str) -> bool {
    let token = token.to_lowercase();
    let input = input.to_lowercase();
    token.contains(&input) || input.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_fuzzy_match_symmetric() {
        assert!(fuzzy_match("김치", "김치볶음"));
        assert!(fuzzy_match("김치볶음", "김치"));
        assert!(!fuzzy_match("김치", "두부"));
    }

    #[test]
    fn test_fuzzy_match_case_insensitive() {
        assert!(fuzzy_match("beef", "BEEF"));
        assert!(fuzzy_match("Soy Sauce", "soy"));
    }

    #[test]
    fn test_empty_input_samples_six_distinct() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let result = engine.suggest_with(&[], &mut rng);
        assert_eq!(result.len(), RANDOM_SAMPLE_SIZE);

        let mut names: Vec<&str> = result.iter().map(|m| m.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), RANDOM_SAMPLE_SIZE);
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        let engine = SuggestionEngine::builtin();

        let a = engine.suggest_with(&[], &mut StdRng::seed_from_u64(42));
        let b = engine.suggest_with(&[], &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_matches_sorted_non_increasing() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        let result = engine.suggest_with(&strings(&["김치", "계란", "마늘"]), &mut rng);
        assert!(!result.is_empty());
        for m in &result {
            assert!(m.match_count >= 1);
        }
        for pair in result.windows(2) {
            assert!(pair[0].match_count >= pair[1].match_count);
        }
    }

    #[test]
    fn test_result_truncated_to_max() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        // 마늘 and 계란 together match well over eight catalog meals
        let result = engine.suggest_with(&strings(&["마늘", "계란"]), &mut rng);
        assert_eq!(result.len(), MAX_MATCHES);
    }

    #[test]
    fn test_tie_break_keeps_catalog_order() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        let result = engine.suggest_with(&strings(&["계란"]), &mut rng);
        let names: Vec<&str> = result.iter().map(|m| m.name.as_str()).collect();

        // All single-count ties, so catalog iteration order is preserved:
        // breakfast entries before lunch before dinner
        assert_eq!(names, ["김치볶음밥", "계란후라이", "팬케이크", "비빔밥", "순두부찌개"]);
    }

    #[test]
    fn test_matched_ingredients_in_input_order() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        let result = engine.suggest_with(&strings(&["생강", "돼지고기"]), &mut rng);
        let jeyuk = result.iter().find(|m| m.name == "제육볶음").unwrap();
        assert_eq!(jeyuk.match_count, 2);
        assert_eq!(jeyuk.matched_ingredients, ["생강", "돼지고기"]);
    }

    #[test]
    fn test_duplicate_inputs_counted_once() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        let result = engine.suggest_with(&strings(&["김치", "김치"]), &mut rng);
        let fried_rice = result.iter().find(|m| m.name == "김치볶음밥").unwrap();
        assert_eq!(fried_rice.match_count, 1);
    }

    #[test]
    fn test_short_token_matches_broadly() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        // Single-character inputs intentionally match any token containing them
        let result = engine.suggest_with(&strings(&["소"]), &mut rng);
        assert!(result.len() >= 2);
        assert!(result.iter().any(|m| m.name == "불고기"));
    }

    #[test]
    fn test_unmatched_input_falls_back_to_random_sample() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(3);

        let result = engine.suggest_with(&strings(&["zzzzzz"]), &mut rng);
        assert_eq!(result.len(), RANDOM_SAMPLE_SIZE);
        assert!(result.iter().all(|m| m.match_count == 0));
    }

    #[test]
    fn test_cross_script_match() {
        let engine = SuggestionEngine::builtin();
        let mut rng = StdRng::seed_from_u64(0);

        let result = engine.suggest_with(&strings(&["BEEF"]), &mut rng);
        assert!(result.iter().any(|m| m.name == "bulgogi"));
    }
}

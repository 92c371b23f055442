use super::model::Meal;

/// In-memory search over an already-fetched meal set: case-insensitive
/// substring match against name, category, restaurant name and description.
///
/// The fetch happens once; this filter is what runs again per keystroke, so
/// it stays pure and allocation-light.
pub fn filter_meals(meals: &[Meal], term: &str) -> Vec<Meal> {
    meals
        .iter()
        .filter(|meal| meal.matches(term))
        .cloned()
        .collect()
}

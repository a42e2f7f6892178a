// tests/search.rs

//! Search tests over the sample dataset: text queries, facets, vocabulary.

mod common;

use common::{ids, sample_store};
use platter::{count_label, extract_facets, filter, Facet, SearchSession, SelectionState, SessionEvent};

#[test]
fn test_empty_search_returns_everything_in_order() {
    let store = sample_store();
    let result = filter(store.recipes(), "", &SelectionState::new());
    assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_query_matches_name_and_ingredients() {
    let store = sample_store();
    let result = filter(store.recipes(), "coco", &SelectionState::new());
    assert_eq!(ids(&result), vec![1, 2, 3]);
}

#[test]
fn test_query_matches_description() {
    let store = sample_store();
    // "riz" is in recipe 4's name and ingredients, and only in recipe 3's description
    let result = filter(store.recipes(), "riz", &SelectionState::new());
    assert_eq!(ids(&result), vec![3, 4]);
}

#[test]
fn test_query_case_insensitive() {
    let store = sample_store();
    let empty = SelectionState::new();
    let upper = filter(store.recipes(), "TOMATE", &empty);
    let lower = filter(store.recipes(), "tomate", &empty);
    assert_eq!(upper, lower);
    assert_eq!(ids(&lower), vec![2, 3, 4, 5]);
}

#[test]
fn test_ingredient_and_ustensil_facets() {
    let store = sample_store();
    let selection = SelectionState::new()
        .with(Facet::Ingredients, "Tomate")
        .with(Facet::Ingredients, "thon en miettes");
    assert_eq!(ids(&filter(store.recipes(), "", &selection)), vec![4, 5]);

    let selection = selection.with(Facet::Ustensils, "Couteau");
    assert_eq!(ids(&filter(store.recipes(), "", &selection)), vec![5]);
}

#[test]
fn test_appliance_facet() {
    let store = sample_store();
    let four = SelectionState::new().with(Facet::Appliances, "FOUR");
    assert_eq!(ids(&filter(store.recipes(), "", &four)), vec![5, 6]);

    let four_or_saladier = four.with(Facet::Appliances, "saladier");
    assert_eq!(ids(&filter(store.recipes(), "", &four_or_saladier)), vec![2, 5, 6]);
}

#[test]
fn test_query_and_facets_together() {
    let store = sample_store();
    let selection = SelectionState::new().with(Facet::Appliances, "four");
    assert_eq!(ids(&filter(store.recipes(), "pomme", &selection)), vec![6]);
    assert!(filter(store.recipes(), "coco", &selection).is_empty());
}

#[test]
fn test_vocabulary_from_full_collection() {
    let store = sample_store();
    let vocabulary = extract_facets(store.recipes());

    let appliances: Vec<&str> = vocabulary.appliances.iter().map(String::as_str).collect();
    assert_eq!(appliances, vec!["blender", "cocotte", "cuiseur de riz", "four", "saladier"]);
    assert_eq!(vocabulary.ustensils.len(), 9);
    assert!(vocabulary.ingredients.contains("lait de coco"));
    assert_eq!(vocabulary.search(Facet::Ingredients, "SUCRE").len(), 3);
}

#[test]
fn test_session_keeps_vocabulary_while_filtering() {
    let mut session = SearchSession::new(sample_store());
    let before = session.vocabulary().clone();

    session.apply("add appliance Blender".parse::<SessionEvent>().unwrap());
    session.apply("query limonade".parse::<SessionEvent>().unwrap());
    assert_eq!(ids(&session.results()), vec![1]);
    assert_eq!(session.vocabulary(), &before);

    session.apply("remove appliance blender".parse::<SessionEvent>().unwrap());
    session.apply(SessionEvent::Clear);
    assert_eq!(session.results().len(), 6);
}

#[test]
fn test_count_label_for_results() {
    let store = sample_store();
    let none = filter(store.recipes(), "introuvable", &SelectionState::new());
    let one = filter(store.recipes(), "limonade", &SelectionState::new());
    let all = filter(store.recipes(), "", &SelectionState::new());

    assert_eq!(count_label(none.len(), "recette", "recettes"), "0 recette");
    assert_eq!(count_label(one.len(), "recette", "recettes"), "1 recette");
    assert_eq!(count_label(all.len(), "recette", "recettes"), "06 recettes");
}

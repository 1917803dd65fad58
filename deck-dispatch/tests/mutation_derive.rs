//! Tests for #[derive(Mutation)] macro

use deck_dispatch::{LoggingMiddleware, Mutation, MutationSummary, Store, StoreWithMiddleware};

#[derive(deck_dispatch::Mutation, Clone, Debug, PartialEq)]
enum TestMutation {
    SetGames(Vec<String>),
    ClearSelection,
    MoveCard { from: usize, to: usize },
    #[mutation(rename = "games/reset")]
    Reset,
}

impl MutationSummary for TestMutation {}

#[test]
fn test_names_are_camel_case() {
    assert_eq!(TestMutation::SetGames(vec![]).name(), "setGames");
    assert_eq!(TestMutation::ClearSelection.name(), "clearSelection");
    assert_eq!(TestMutation::MoveCard { from: 0, to: 1 }.name(), "moveCard");
}

#[test]
fn test_rename_overrides_name() {
    assert_eq!(TestMutation::Reset.name(), "games/reset");
}

#[test]
fn test_derived_mutation_drives_store() {
    fn reducer(state: &mut Vec<String>, mutation: TestMutation) -> bool {
        match mutation {
            TestMutation::SetGames(games) => {
                *state = games;
                true
            }
            TestMutation::Reset => {
                state.clear();
                true
            }
            _ => false,
        }
    }

    let mut store = Store::new(Vec::new(), reducer);
    assert!(store.commit(TestMutation::SetGames(vec!["chess".into()])));
    assert_eq!(store.state(), &vec!["chess".to_string()]);

    let mut logged = StoreWithMiddleware::new(Vec::new(), reducer, LoggingMiddleware::new());
    assert!(!logged.commit(TestMutation::ClearSelection));
    assert!(logged.commit(TestMutation::Reset));
}

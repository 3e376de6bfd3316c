use menu_core::{update, BrowseSettings, BrowseState, Msg};

#[test]
fn update_is_noop() {
    let state = BrowseState::new(BrowseSettings::default());
    for msg in [Msg::NoOp, Msg::Tick] {
        let (next, effects) = update(state.clone(), msg);

        assert_eq!(state, next);
        assert!(effects.is_empty());
    }
}

use url::Url;
use wayback_core::{update, InfobarState, Msg};

#[test]
fn update_is_noop() {
    let state = InfobarState::new(Url::parse("https://example.com/missing").unwrap());
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

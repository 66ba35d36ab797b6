use counter_mvu::{counter_reducer, Action, Context, CounterState, Provider, Renderer, TestRenderer};
use mockall::predicate::eq;
use mockall::{mock, Sequence};

use super::init_tracing;

mock! {
    pub CountRenderer {}

    impl Renderer<i64> for CountRenderer {
        fn render(&mut self, count: i64);
    }
}

fn count_view(cx: &Context<'_, CounterState, Action>) -> i64 {
    cx.state.count
}

#[test]
fn given_mount_and_actions_should_render_each_state_in_order() {
    init_tracing();
    let mut renderer = MockCountRenderer::new();
    let mut sequence = Sequence::new();
    for expected in [0, 1, 2, 1] {
        renderer
            .expect_render()
            .with(eq(expected))
            .times(1)
            .in_sequence(&mut sequence)
            .return_const(());
    }

    let mut provider = Provider::new(CounterState::default(), counter_reducer, count_view, renderer);
    provider.mount();

    let dispatch = provider.dispatcher();
    dispatch.dispatch(Action::Increment);
    dispatch.dispatch(Action::Increment);
    dispatch.dispatch(Action::Decrement);

    assert_eq!(provider.process_pending(), 3);
}

#[test]
fn given_an_unrecognized_action_should_still_render_once() {
    init_tracing();
    let mut renderer = MockCountRenderer::new();
    renderer.expect_render().with(eq(7)).times(2).return_const(());

    let mut provider = Provider::new(CounterState::new(7), counter_reducer, count_view, renderer);
    provider.mount();
    provider.dispatcher().dispatch(Action::Unrecognized);

    assert_eq!(provider.process_pending(), 1);
    assert_eq!(provider.state().count, 7);
}

#[test]
fn given_no_pending_actions_should_not_render() {
    let mut renderer = MockCountRenderer::new();
    renderer.expect_render().times(1).return_const(());

    let mut provider = Provider::new(CounterState::default(), counter_reducer, count_view, renderer);
    provider.mount();

    assert_eq!(provider.process_pending(), 0);
    assert_eq!(provider.process_pending(), 0);
}

#[test]
fn given_a_boxed_test_renderer_should_capture_renders() {
    let renderer = TestRenderer::<i64>::new();
    let mut provider = Provider::new(
        CounterState::default(),
        counter_reducer,
        count_view,
        renderer.boxed(),
    );
    provider.mount();
    provider.dispatcher().dispatch(Action::Decrement);
    provider.process_pending();

    assert_eq!(renderer.count(), 2);
    renderer.with_renders(|renders| assert_eq!(renders, &vec![0, -1]));
}

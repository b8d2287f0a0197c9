use std::cell::RefCell;
use std::rc::Rc;

use curve_chart::ChartError;
use curve_chart::api::{Chart, ChartConfig};
use curve_chart::core::Rect;
use curve_chart::extensions::{ChartContext, ChartEvent, ChartObserver};
use curve_chart::interaction::TooltipSize;
use curve_chart::render::NullRenderer;

#[derive(Clone)]
struct RecordingObserver {
    id: String,
    events: Rc<RefCell<Vec<(String, ChartEvent, ChartContext)>>>,
}

impl RecordingObserver {
    fn new(
        id: impl Into<String>,
        events: Rc<RefCell<Vec<(String, ChartEvent, ChartContext)>>>,
    ) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartObserver for RecordingObserver {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: ChartEvent, context: ChartContext) {
        self.events
            .borrow_mut()
            .push((self.id.clone(), event, context));
    }
}

fn event_kind(event: &ChartEvent) -> &'static str {
    match event {
        ChartEvent::SamplesUpdated { .. } => "samples",
        ChartEvent::LayoutChanged { .. } => "layout",
        ChartEvent::PointerChanged { .. } => "pointer",
        ChartEvent::PointerLeft => "leave",
        ChartEvent::TooltipPlaced { .. } => "tooltip",
        ChartEvent::Rendered => "rendered",
    }
}

fn chart() -> Chart<NullRenderer> {
    Chart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init")
}

#[test]
fn registry_enforces_unique_non_empty_ids() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart();

    chart
        .register_observer(Box::new(RecordingObserver::new("redraw", Rc::clone(&events))))
        .expect("register");
    assert!(chart.has_observer("redraw"));
    assert_eq!(chart.observer_count(), 1);

    let duplicate = chart.register_observer(Box::new(RecordingObserver::new(
        "redraw",
        Rc::clone(&events),
    )));
    assert!(matches!(duplicate, Err(ChartError::InvalidData(_))));

    let empty = chart.register_observer(Box::new(RecordingObserver::new("", Rc::clone(&events))));
    assert!(matches!(empty, Err(ChartError::InvalidData(_))));

    assert!(chart.unregister_observer("redraw"));
    assert!(!chart.unregister_observer("redraw"));
    assert_eq!(chart.observer_count(), 0);
}

#[test]
fn events_fire_only_on_change() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart();
    chart
        .register_observer(Box::new(RecordingObserver::new("redraw", Rc::clone(&events))))
        .expect("register");

    chart
        .set_values(&(1..=12).map(f64::from).collect::<Vec<_>>())
        .expect("set values");
    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 380.0))
        .expect("container");
    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 380.0))
        .expect("same container");
    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    chart.pointer_move(405.0, 100.0).expect("same position");
    chart
        .measure_tooltip(TooltipSize::new(90.0, 34.0))
        .expect("measure");
    chart
        .measure_tooltip(TooltipSize::new(90.0, 34.0))
        .expect("same measurement");
    chart.pointer_leave();
    chart.pointer_leave();
    chart.render().expect("render");

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|(_, event, _)| event_kind(event))
        .collect();
    assert_eq!(
        kinds,
        [
            "samples", "layout", "pointer", "tooltip", "tooltip", "leave", "rendered"
        ]
    );

    let placed: Vec<(f64, f64)> = events
        .borrow()
        .iter()
        .filter_map(|(_, event, _)| match *event {
            ChartEvent::TooltipPlaced { left, top } => Some((left, top)),
            _ => None,
        })
        .collect();
    assert_eq!(placed, [(405.0, 100.0), (360.0, 66.0)]);
}

#[test]
fn pointer_event_carries_state_and_context() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart();
    chart
        .set_values(&(1..=12).map(f64::from).collect::<Vec<_>>())
        .expect("set values");
    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 380.0))
        .expect("container");
    chart
        .register_observer(Box::new(RecordingObserver::new("redraw", Rc::clone(&events))))
        .expect("register");

    chart.pointer_move(405.0, 100.0).expect("pointer captured");
    let recorded = events.borrow();
    let (_, event, context) = recorded.first().expect("event");
    let ChartEvent::PointerChanged { state } = *event else {
        panic!("expected pointer change, got {event:?}");
    };
    assert_eq!(state.nearest_index, 6);
    assert_eq!(state.gradient_index, 50);
    assert_eq!(context.samples_len, 12);
    assert_eq!(context.pointer, Some(state));
    assert_eq!(context.plot_area.rect.width, 660.0);
}

#[test]
fn observers_are_notified_in_registration_order() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart();
    for id in ["first", "second", "third"] {
        chart
            .register_observer(Box::new(RecordingObserver::new(id, Rc::clone(&events))))
            .expect("register");
    }
    chart.unregister_observer("second");

    chart.set_values(&[1.0, 2.0]).expect("set values");
    let order: Vec<String> = events.borrow().iter().map(|(id, _, _)| id.clone()).collect();
    assert_eq!(order, ["first", "third"]);
}

#[test]
fn resize_that_loses_the_pointer_reports_leave() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut chart = chart();
    chart
        .set_values(&(1..=12).map(f64::from).collect::<Vec<_>>())
        .expect("set values");
    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 380.0))
        .expect("container");
    chart.pointer_move(725.0, 42.0).expect("pointer captured");
    chart
        .register_observer(Box::new(RecordingObserver::new("redraw", Rc::clone(&events))))
        .expect("register");

    chart
        .set_container_bounds(Rect::new(0.0, 0.0, 755.0, 200.0))
        .expect("resize");
    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|(_, event, _)| event_kind(event))
        .collect();
    assert_eq!(kinds, ["layout", "leave"]);
}

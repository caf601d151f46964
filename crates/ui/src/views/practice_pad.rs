use dioxus::prelude::*;

type Point = (f64, f64);

/// Strokes drawn on the pad; a stroke only grows while the pointer is down.
#[derive(Debug, Clone, Default, PartialEq)]
struct Sketch {
    strokes: Vec<Vec<Point>>,
    drawing: bool,
}

impl Sketch {
    fn begin(&mut self, point: Point) {
        self.strokes.push(vec![point]);
        self.drawing = true;
    }

    fn extend(&mut self, point: Point) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(point);
        }
    }

    fn end(&mut self) {
        self.drawing = false;
    }

    fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    fn paths(&self) -> Vec<String> {
        self.strokes.iter().map(|s| path_data(s)).collect()
    }
}

fn path_data(stroke: &[Point]) -> String {
    let mut points = stroke.iter();
    let Some((x, y)) = points.next() else {
        return String::new();
    };
    let mut d = format!("M {x:.1} {y:.1}");
    for (x, y) in points {
        d.push_str(&format!(" L {x:.1} {y:.1}"));
    }
    d
}

fn pointer_point(evt: &PointerEvent) -> Point {
    let point = evt.element_coordinates();
    (point.x, point.y)
}

/// Free-hand drawing surface for practising the current character.
///
/// Takes mouse, pen and touch input through pointer events. Callers key it by
/// character so the strokes reset on every change.
#[component]
pub fn PracticePad() -> Element {
    let mut sketch = use_signal(Sketch::default);
    let paths = sketch.read().paths();

    rsx! {
        div { class: "practice-pad",
            svg {
                class: "practice-surface",
                view_box: "0 0 300 300",
                onpointerdown: move |evt: PointerEvent| sketch.write().begin(pointer_point(&evt)),
                onpointermove: move |evt: PointerEvent| sketch.write().extend(pointer_point(&evt)),
                onpointerup: move |_| sketch.write().end(),
                onpointerleave: move |_| sketch.write().end(),
                onpointercancel: move |_| sketch.write().end(),
                for (i, d) in paths.into_iter().enumerate() {
                    path { key: "{i}", d: "{d}" }
                }
            }
            button {
                class: "link-button",
                onclick: move |_| sketch.write().clear(),
                "Clear"
            }
        }
    }
}

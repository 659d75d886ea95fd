use dioxus::prelude::*;

/// Assumed until the first measurement arrives.
const INITIAL_WIDTH: u32 = 1280;

/// Tracks `window.innerWidth`, updating on every resize.
pub fn use_viewport_width() -> Signal<u32> {
    let mut width = use_signal(|| INITIAL_WIDTH);

    use_effect(move || {
        let mut eval = document::eval(r#"
            dioxus.send(window.innerWidth);
            window.addEventListener("resize", () => dioxus.send(window.innerWidth));
        "#);

        spawn(async move {
            while let Ok(measured) = eval.recv::<u32>().await {
                if *width.peek() != measured {
                    width.set(measured);
                }
            }
            tracing::debug!("viewport listener closed");
        });
    });

    width
}

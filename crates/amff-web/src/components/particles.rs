use amff_core::Particle;
use leptos::html::Div;
use leptos::prelude::*;

/// Container that receives one `div.particle` per particle once mounted.
/// The nodes are never touched again.
#[component]
pub fn Particles(particles: Vec<Particle>) -> impl IntoView {
    let container = NodeRef::<Div>::new();

    Effect::new(move || {
        let Some(container) = container.get() else {
            return;
        };
        if container.child_element_count() > 0 {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for particle in &particles {
            let Ok(node) = document.create_element("div") else {
                continue;
            };
            node.set_class_name("particle");
            let _ = node.set_attribute("style", &particle.css_style());
            let _ = container.append_child(&node);
        }
    });

    view! { <div class="floating-particles" node_ref=container></div> }
}

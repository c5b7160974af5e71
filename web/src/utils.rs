use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Helper component to attach the contents into the document.body instead of in the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let modal_host = gloo::utils::body();
    create_portal(props.children.clone(), modal_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}

/// Three-digit display used by the move counter.
pub(crate) fn format_for_counter(num: i32) -> String {
    match num {
        ..0 => "000".to_string(),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

/// `mm:ss` display used by the elapsed-time counter.
pub(crate) fn format_clock(secs: u32) -> String {
    let minutes = (secs / 60).min(99);
    let seconds = secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

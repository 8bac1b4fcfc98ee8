use revue_core::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct BannerState {
    top_text: String,
    bottom_text: String,
}

impl ViewState for BannerState {}

#[derive(Default)]
struct BannerActions {
    dismissals: std::cell::Cell<u32>,
}

impl Actions for BannerActions {}

/// Headless stand-in for a two-label banner view.
#[derive(Default)]
struct Banner {
    state: BannerState,
    host: Host,
    actions: BannerActions,
    top_label: String,
    bottom_label: String,
}

impl StateOwner for Banner {
    type State = BannerState;

    fn state(&self) -> &BannerState {
        &self.state
    }

    fn replace_state(&mut self, next: BannerState) -> BannerState {
        std::mem::replace(&mut self.state, next)
    }

    fn render(&mut self, state: &BannerState, old: Option<&BannerState>, animated: bool) {
        self.top_label = state.top_text.clone();
        self.bottom_label = state.bottom_text.clone();
        log::info!(
            "render top={:?} bottom={:?} was={:?} animated={}",
            state.top_text,
            state.bottom_text,
            old.map(|o| &o.bottom_text),
            animated
        );
    }

    fn host(&self) -> Host {
        self.host
    }
}

impl HasActions for Banner {
    type Actions = BannerActions;

    fn actions(&self) -> &BannerActions {
        &self.actions
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut banner = Banner::with_state(BannerState {
        top_text: "Heading".into(),
        bottom_text: "Subheading".into(),
    });

    // Off-screen update: dispatched, snaps.
    banner.update(|s| s.bottom_text = "Loading…".into());

    // Same value again: gated out.
    banner.update(|s| s.bottom_text = "Loading…".into());

    // Lay the banner out on a surface; the next change may animate.
    banner.host = Host::View {
        frame: Rect {
            x: 0.0,
            y: 0.0,
            w: 320.0,
            h: 64.0,
        },
    };
    banner.update(|s| s.bottom_text = "Ready".into());

    // A tap would be forwarded out through the actions seam.
    let actions = banner.actions();
    actions.dismissals.set(actions.dismissals.get() + 1);
    log::info!("dismissed {} time(s)", banner.actions().dismissals.get());

    println!("{}: {}", banner.top_label, banner.bottom_label);
    Ok(())
}

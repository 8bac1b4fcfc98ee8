use crate::geometry::Rect;

/// What an owner reports about its place in the live display hierarchy.
///
/// The dispatcher turns this into the `animated` hint passed to render;
/// owners only report status, they never interpret it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Host {
    /// Not part of any presentation hierarchy.
    #[default]
    Detached,
    /// View-like element attached to a surface and laid out at `frame`.
    View { frame: Rect },
    /// Controller-like element. `view_attached` stays false until the managed
    /// view has been materialized and put on a surface.
    Controller { view_attached: bool },
}

impl Host {
    /// Whether a visual transition would currently be visible. Views animate
    /// only when laid out with non-empty bounds, controllers whenever their
    /// managed view is live.
    pub fn allows_animation(&self) -> bool {
        match self {
            Host::Detached => false,
            Host::View { frame } => !frame.is_empty(),
            Host::Controller { view_attached } => *view_attached,
        }
    }
}

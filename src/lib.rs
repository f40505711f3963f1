//! Folio renders a single-page portfolio from typed content and drives its scroll runtime
//! headlessly.
//!
//! - Build or load a [`ContentStore`]
//! - Compose a [`Page`] and serialize it with [`render_document`]
//! - Mount a [`PageSession`] and feed it input, navigation and frames; the
//!   [`SmoothScroll`] controller publishes each frame to the [`ScrollAnimator`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
pub mod contact;
pub mod content;
pub mod dom;
pub mod foundation;
pub mod layout;
pub mod page;
pub mod scroll;
pub mod sections;
pub mod session;

pub use crate::animation::{ease::Ease, style::Style, style::StyleProps, tween::Timing};
pub use crate::config::{NavigationOpts, SiteConfig};
pub use crate::contact::{ContactForm, FormField, MailtoLink};
pub use crate::content::{ContentBuilder, ContentStore};
pub use crate::dom::html::{RenderOpts, render_document};
pub use crate::foundation::core::{Rect, ScrollDirection, Vec2, Viewport};
pub use crate::foundation::error::{FolioError, FolioResult};
pub use crate::page::{ComposeOpts, Manifest, Page};
pub use crate::scroll::{
    RevealSpec, ScrollAnimator, ScrollFrame, ScrollHost, ScrollInput, SmoothScroll,
    SmoothScrollOpts, TriggerSpec,
};
pub use crate::sections::SectionKind;
pub use crate::session::{NavigateOutcome, PageSession, Script, SessionOpts, simulate};

pub mod appointments;
pub mod availability;
pub mod feedback;
pub mod notifications;
pub mod poller;
pub mod profile;
pub mod session;

pub use appointments::{AppointmentService, TargetStatus, TransitionError};
pub use availability::{AvailabilityError, AvailabilityService};
pub use feedback::{Banner, BannerKind, FeedbackBoard};
pub use notifications::{Notification, NotificationCenter, NotificationSource};
pub use poller::NotificationPoller;
pub use profile::ProfileService;
pub use session::{InitialPage, LaunchParams, Session, SessionManager, SessionStore};

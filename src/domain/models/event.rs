/// Emitted by the gateway when the remote service denies authorization. The
/// presentation layer subscribes and navigates to the login boundary; the
/// gateway itself never touches navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Expired,
}

/// Classification for fallback policy.
///
/// Used by the fetcher to decide whether a failed step moves on to the next
/// source in the chain or aborts the whole fetch.
///
/// # Behavior Summary
///
/// | Class | Try Next Source? | Reaches Caller? |
/// |-------|------------------|-----------------|
/// | `Fallback` | Yes | No (logged only) |
/// | `Propagate` | No | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureClass {
    /// Ordinary fetch failure: bad status, transport error, malformed body,
    /// unreadable local file. The chain continues and ends in the empty default.
    Fallback,

    /// Unexpected internal failure. The request itself is invalid or the
    /// fetcher is in a state it should never reach; retrying elsewhere won't help.
    Propagate,
}

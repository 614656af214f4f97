//! The refresh trigger.

use crate::{
    error::RefreshError,
    loading::{LoadingGuard, LoadingTarget},
    transport::{PostRequest, RefreshTransport},
};
use log::debug;
use std::future::Future;

/// Mark `target` busy and post a dark-mode refresh through `transport`.
///
/// The marker is applied before this function returns, so the element shows
/// as loading before the returned future is first polled. It is removed once
/// the request settles with any status, fails, or the future is dropped.
///
/// Every call issues its own request. Overlapping calls on one element are
/// not coordinated: the first to settle clears the marker.
pub fn refresh<T, C>(target: T, transport: C) -> impl Future<Output = Result<u16, RefreshError>>
where
    T: LoadingTarget,
    C: RefreshTransport,
{
    let guard = LoadingGuard::engage(target);
    async move {
        let _guard = guard;
        let request = PostRequest::refresh()?;
        debug!("POST {} {}", request.path, request.body);
        transport.send(request).await
    }
}

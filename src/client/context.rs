/**
 * Auth Provider Scope
 *
 * Code that needs the auth store without having it passed in runs inside
 * [`provide`]; anything in that future can call [`use_auth`]. Outside a
 * scope `use_auth` fails instead of handing out a default store.
 *
 * The scope is task-local: it covers the given future, not tasks it spawns.
 */

use std::future::Future;

use crate::client::error::ClientError;
use crate::client::store::AuthStore;

tokio::task_local! {
    static AUTH_STORE: AuthStore;
}

/// Run `future` with `store` installed as the current auth store
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use shopsmart::client::{provide, use_auth, AuthStore, Config, HttpAuthApi, MemoryTokenStorage};
///
/// # async fn example() {
/// let config = Config::new();
/// let store = AuthStore::new(
///     Arc::new(HttpAuthApi::new(&config)),
///     Arc::new(MemoryTokenStorage::new()),
/// );
///
/// provide(store, async {
///     let auth = use_auth().expect("inside provider");
///     assert!(!auth.is_authenticated());
/// })
/// .await;
/// # }
/// ```
pub async fn provide<F>(store: AuthStore, future: F) -> F::Output
where
    F: Future,
{
    AUTH_STORE.scope(store, future).await
}

/// The auth store of the enclosing [`provide`] scope
///
/// # Errors
///
/// `ClientError::OutsideProvider` when called outside any scope.
pub fn use_auth() -> Result<AuthStore, ClientError> {
    AUTH_STORE
        .try_with(AuthStore::clone)
        .map_err(|_| ClientError::OutsideProvider)
}

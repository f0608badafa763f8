//! Follow `ListUsers` pagination until the pool is exhausted.
//!
//! Pages are requested strictly one after another, since each request needs
//! the token returned by the previous one. Everything is held in memory until
//! the last page arrives.

use crate::cognito::{UserDirectory, UserType};
use crate::utils::error::CognitoError;
use log::{debug, info};

/// Collect every user of a pool
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `directory` - Remote directory to page through
/// * `user_pool_id` - Pool to list
///
/// # Returns
/// All users, in page order and then in order within each page
///
/// # Errors
/// The first failed page request is returned as-is. Users gathered from
/// earlier pages are discarded.
pub fn collect_users<D>(directory: &D, user_pool_id: &str) -> Result<Vec<UserType>, CognitoError>
where
    D: UserDirectory + ?Sized,
{
    let mut users = Vec::new();
    let mut token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = directory.list_users(user_pool_id, token.as_deref())?;
        pages += 1;

        let next = continuation(page.pagination_token);

        debug!(
            "Page {}: {} users{}",
            pages,
            page.users.len(),
            if next.is_some() { ", more to follow" } else { "" }
        );

        users.extend(page.users);

        match next {
            Some(next) => token = Some(next),
            None => break,
        }
    }

    info!("Collected {} users from {} page(s)", users.len(), pages);

    Ok(users)
}

/// Token for the next request, if any
///
/// An empty token ends the listing just like a missing one.
fn continuation(token: Option<String>) -> Option<String> {
    token.filter(|next| !next.is_empty())
}

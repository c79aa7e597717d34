//! Resolver context helpers

use async_graphql::{Context, ErrorExtensions, Result};

use crate::auth::{Identity, require_admin};
use crate::core::ServerState;

pub(crate) fn state<'a>(ctx: &Context<'a>) -> Result<&'a ServerState> {
    ctx.data::<ServerState>()
}

/// Identity attached to this request, `None` when anonymous
pub(crate) fn identity<'a>(ctx: &Context<'a>) -> Option<&'a Identity> {
    ctx.data_opt::<Identity>()
}

/// Fails with `Unauthorized` unless the caller is ADMIN
pub(crate) fn admin<'a>(ctx: &Context<'a>, operation: &str) -> Result<&'a Identity> {
    require_admin(identity(ctx), operation).map_err(|e| e.extend())
}

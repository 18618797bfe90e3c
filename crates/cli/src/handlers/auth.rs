use anyhow::{Result, bail};
use client::SessionUser;
use tracing::info;
use uuid::Uuid;

use super::{Context, print_json, print_message};

/// Stores the bearer token, then resolves and remembers whose it is.
pub async fn login(ctx: &Context, token: String, user_id: Uuid) -> Result<()> {
    ctx.session.sign_in(token, None)?;

    let user = ctx.api.get_user(user_id).await?;
    ctx.session.set_user(SessionUser::from(&user))?;
    info!("Signed in as {} ({})", user.full_name(), user.role.name.as_str());

    print_json(&user)
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.session.teardown()?;
    print_message(None, "Signed out")
}

pub fn whoami(ctx: &Context) -> Result<()> {
    match (ctx.session.user(), ctx.session.is_authenticated()) {
        (Some(user), _) => print_json(&user),
        (None, true) => bail!("A token is stored but its user is unknown, run `login` again"),
        (None, false) => bail!("Not signed in"),
    }
}

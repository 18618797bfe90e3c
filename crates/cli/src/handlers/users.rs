use anyhow::Result;
use clap::Subcommand;
use client::SessionUser;
use domain::dto::{UpdateProfileRequest, UpdateUserRequest, UserFilters};
use domain::models::{RoleName, UserStatus};
use uuid::Uuid;

use super::{Context, print_json, print_message};

#[derive(Subcommand)]
pub enum UsersCommand {
    List {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<RoleName>,

        #[arg(long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,
    },
    Show { id: Uuid },
    /// Change a user's role or account status
    Update {
        id: Uuid,

        #[arg(long)]
        role_id: Option<i64>,

        #[arg(long)]
        status: Option<UserStatus>,
    },
    Delete { id: Uuid },
    Roles,
    /// Update your own name
    Profile {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,
    },
}

pub async fn run(ctx: &Context, command: UsersCommand) -> Result<()> {
    match command {
        UsersCommand::List {
            name,
            email,
            role,
            page,
            limit,
        } => {
            let filters = UserFilters {
                name,
                email,
                role,
                page,
                limit,
            };
            print_json(&ctx.api.list_users(&filters).await?)
        }
        UsersCommand::Show { id } => print_json(&ctx.api.get_user(id).await?),
        UsersCommand::Update {
            id,
            role_id,
            status,
        } => {
            let request = UpdateUserRequest { role_id, status };
            print_json(&ctx.api.update_user(id, &request).await?)
        }
        UsersCommand::Delete { id } => {
            let message = ctx.api.delete_user(id).await?;
            print_message(message, "User deleted")
        }
        UsersCommand::Roles => print_json(&ctx.api.roles().await?),
        UsersCommand::Profile {
            first_name,
            last_name,
        } => {
            let request = UpdateProfileRequest {
                first_name,
                last_name,
            };
            let user = ctx.api.update_profile(&request).await?;
            ctx.session.set_user(SessionUser::from(&user))?;
            print_json(&user)
        }
    }
}

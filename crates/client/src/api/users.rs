use domain::dto::{UpdateProfileRequest, UpdateUserRequest, UserFilters};
use domain::models::{Page, Role, User};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn list_users(&self, filters: &UserFilters) -> Result<Page<User>> {
        filters.validate()?;
        self.page(self.get_with("/users", filters)).await
    }

    pub async fn get_user(&self, user_id: Uuid) -> Result<User> {
        self.data(self.get(&format!("/users/{}", user_id))).await
    }

    pub async fn update_user(&self, user_id: Uuid, request: &UpdateUserRequest) -> Result<User> {
        request.validate()?;
        let user = self
            .data(self.patch(&format!("/users/{}", user_id)).json(request))
            .await?;
        info!("Updated user {}", user_id);
        Ok(user)
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User> {
        request.validate()?;
        let user: User = self.data(self.patch("/users/me").json(request)).await?;
        info!("Updated own profile");
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: Uuid) -> Result<Option<String>> {
        let message = self
            .acknowledge(self.delete(&format!("/users/{}", user_id)))
            .await?;
        info!("Deleted user {}", user_id);
        Ok(message)
    }

    pub async fn roles(&self) -> Result<Vec<Role>> {
        self.list(self.get("/roles")).await
    }
}

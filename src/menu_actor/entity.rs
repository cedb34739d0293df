//! ActorEntity trait implementation for the MenuItem domain type.
//!
//! See the trait implementation on [`MenuItem`] for method documentation.

use crate::framework::ActorEntity;
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemUpdate, ProductId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = ProductId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new MenuItem; the id comes from the payload.
    fn from_create_params(_seq: u32, params: MenuItemCreate) -> Result<Self, MenuError> {
        Ok(Self {
            id: params.id,
            name: params.name,
            description: params.description,
            price: params.price,
            ingredients: params.ingredients,
        })
    }

    /// Rejects blank ids, negative prices and negative per-unit quantities.
    fn validate(&self) -> Result<(), MenuError> {
        if self.id.0.trim().is_empty() {
            return Err(MenuError::ValidationError("product id must not be blank".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(MenuError::ValidationError(format!(
                "price of {} must be a non-negative number, got {}",
                self.id, self.price
            )));
        }
        if let Some(line) = self
            .ingredients
            .iter()
            .find(|line| !line.quantity.is_finite() || line.quantity < 0.0)
        {
            return Err(MenuError::ValidationError(format!(
                "{} needs a non-negative amount of {}, got {}",
                self.id, line.ingredient_id, line.quantity
            )));
        }
        Ok(())
    }

    /// Handles updates to the MenuItem entity.
    ///
    /// # Fields Updated
    /// - `name`, `description`, `price`
    /// - `ingredients`: replaces the whole recipe
    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), MenuError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_recipe_quantities_are_rejected() {
        let item = MenuItem::new("latte", "Latte", 3.5).with_ingredient("milk", -1.0);
        assert!(matches!(item.validate(), Err(MenuError::ValidationError(_))));
    }

    #[test]
    fn negative_prices_are_rejected() {
        let item = MenuItem::new("latte", "Latte", -0.5);
        assert!(matches!(item.validate(), Err(MenuError::ValidationError(_))));
    }

    #[tokio::test]
    async fn update_replaces_only_given_fields() {
        let mut item = MenuItem::new("latte", "Latte", 3.5).with_ingredient("milk", 2.0);
        let update = MenuItemUpdate {
            price: Some(4.0),
            ..Default::default()
        };
        item.on_update(update, &()).await.unwrap();
        assert_eq!(item.price, 4.0);
        assert_eq!(item.name, "Latte");
        assert_eq!(item.ingredients.len(), 1);
    }
}

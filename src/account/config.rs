use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder, Debug, Clone, PartialEq)]
pub struct AccountConfig {
    /// The balance the account opens with. It is not validated: a negative opening balance is
    /// taken as-is.
    #[builder(default = 0.0)]
    pub(crate) initial_balance: f64,
    /// The account id. A random v4 id is generated if not specified.
    #[builder(default = Uuid::new_v4(), setter(into))]
    pub(crate) id: Uuid,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AccountConfig {
    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }
}

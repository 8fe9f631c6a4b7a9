// Provider registry - identifier to factory, and the live instances built from it
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::{DataItemProvider, ItemId, ProviderFactory};
use crate::domain::context::ProviderContext;
use crate::domain::error::DashboardError;
use crate::domain::row::ItemState;
use crate::domain::snapshot::TelemetrySnapshot;

#[derive(Clone, Default)]
pub struct ProviderRegistry {
    factories: BTreeMap<ItemId, ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in provider
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        super::battery::register(&mut registry);
        super::charge::register(&mut registry);
        super::driving::register(&mut registry);
        super::location::register(&mut registry);
        super::range::register(&mut registry);
        super::software::register(&mut registry);
        super::state::register(&mut registry);
        super::temperature::register(&mut registry);
        registry
    }

    /// Registering an identifier again replaces its factory
    pub fn register(&mut self, id: ItemId, factory: ProviderFactory) {
        if self.factories.insert(id, factory).is_some() {
            tracing::debug!("Replacing provider factory for {}", id);
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.factories.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn instantiate(&self, context: Arc<ProviderContext>) -> ProviderSet {
        let instances = self
            .factories
            .iter()
            .map(|(id, factory)| (*id, ProviderInstance::new(*id, factory())))
            .collect();

        ProviderSet { context, instances }
    }
}

pub struct ProviderInstance {
    id: ItemId,
    provider: Box<dyn DataItemProvider>,
    state: ItemState,
}

impl ProviderInstance {
    fn new(id: ItemId, provider: Box<dyn DataItemProvider>) -> Self {
        Self {
            id,
            provider,
            state: ItemState::hidden(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn state(&self) -> &ItemState {
        &self.state
    }

    pub fn update_data(&mut self, snapshot: &TelemetrySnapshot, ctx: &ProviderContext) {
        self.state = match self.provider.derive(snapshot, ctx) {
            Ok(state) => state,
            Err(e) => {
                tracing::debug!("Hiding {}: {}", self.id, e);
                ItemState::hidden()
            }
        };
    }
}

/// One live provider instance per registered identifier
pub struct ProviderSet {
    context: Arc<ProviderContext>,
    instances: HashMap<ItemId, ProviderInstance>,
}

impl ProviderSet {
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn update_data(&mut self, snapshot: &TelemetrySnapshot) {
        for instance in self.instances.values_mut() {
            instance.update_data(snapshot, &self.context);
        }
    }

    pub fn get(&self, identifier: &str) -> Result<&ProviderInstance, DashboardError> {
        identifier
            .parse::<ItemId>()
            .ok()
            .and_then(|id| self.instances.get(&id))
            .ok_or_else(|| DashboardError::UnknownProviderIdentifier(identifier.to_string()))
    }
}

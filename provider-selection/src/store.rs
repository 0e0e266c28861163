use crate::{parse_scores, Error, Provider, Result, CRITERIA, DEFAULT_PROVIDERS};

/// Ordered, in-memory collection of providers. Names are a unique key. A rejected operation
/// leaves the store unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Store {
    providers: Vec<Provider>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding [`DEFAULT_PROVIDERS`].
    pub fn seeded() -> Self {
        let providers = DEFAULT_PROVIDERS
            .iter()
            .filter_map(|(name, scores)| Provider::new(name, *scores).ok())
            .collect();
        Self { providers }
    }

    /// Append a provider.
    pub fn add(&mut self, name: &str, scores: [f64; CRITERIA]) -> Result<()> {
        let provider = Provider::new(name, scores).inspect_err(|err| {
            tracing::debug!("rejected add of {name:?}: {err}");
        })?;
        if self.get(&provider.name).is_some() {
            tracing::debug!("rejected add of duplicate {:?}", provider.name);
            return Err(Error::DuplicateName(provider.name));
        }
        tracing::info!(name = %provider.name, scores = ?provider.scores, "added provider");
        self.providers.push(provider);
        Ok(())
    }

    /// Replace all scores of the named provider, keeping its position.
    pub fn update(&mut self, name: &str, scores: [f64; CRITERIA]) -> Result<()> {
        let found = parse_scores(scores).and_then(|scores| {
            let index = self
                .position(name)
                .ok_or_else(|| Error::NotFound(name.trim().to_string()))?;
            Ok((index, scores))
        });
        let (index, scores) = found.inspect_err(|err| {
            tracing::debug!("rejected update of {name:?}: {err}");
        })?;
        let provider = &mut self.providers[index];
        provider.scores = scores;
        tracing::info!(name = %provider.name, scores = ?provider.scores, "updated provider");
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<Provider> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::NotFound(name.trim().to_string()))
            .inspect_err(|err| tracing::debug!("rejected remove of {name:?}: {err}"))?;
        let provider = self.providers.remove(index);
        tracing::info!(name = %provider.name, "removed provider");
        Ok(provider)
    }

    pub fn list(&self) -> &[Provider] {
        &self.providers
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.position(name).map(|index| &self.providers[index])
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.providers.iter().position(|p| p.name == name)
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};

    use alternative_ranking::Value;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::{
        layer::{Context, SubscriberExt as _},
        Layer, Registry,
    };

    use super::Store;
    use crate::{Criterion, Error, DEFAULT_PROVIDERS};

    /// Counts events logged at `debug`.
    #[derive(Clone, Default)]
    struct DebugEvents(Arc<Mutex<usize>>);

    impl<S: Subscriber> Layer<S> for DebugEvents {
        fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
            if *event.metadata().level() == Level::DEBUG {
                *self.0.lock().unwrap() += 1;
            }
        }
    }

    #[test]
    fn seeded_in_order() {
        let store = Store::seeded();
        let names: Vec<&str> = store.names().collect();
        let expected: Vec<&str> = DEFAULT_PROVIDERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn add_appends() {
        let mut store = Store::seeded();
        store.add("  A6 Starlink ", [3.0; 5]).unwrap();
        assert_eq!(store.len(), 6);
        assert_eq!(store.list().last().unwrap().name, "A6 Starlink");
    }

    #[test]
    fn add_rejects_empty_and_duplicate_names() {
        let mut store = Store::seeded();
        let before = store.clone();
        assert_eq!(store.add("   ", [3.0; 5]), Err(Error::EmptyName));
        assert_eq!(
            store.add("A2 Biznet", [3.0; 5]),
            Err(Error::DuplicateName("A2 Biznet".into()))
        );
        assert_eq!(store, before);
    }

    #[test]
    fn add_rejects_invalid_scores() {
        let mut store = Store::new();
        assert_eq!(
            store.add("A6 Starlink", [3.0, 3.0, -1.0, 3.0, 3.0]),
            Err(Error::InvalidScore {
                criterion: Criterion::UploadSymmetry,
                value: -1.0
            })
        );
        assert!(store.add("A6 Starlink", [3.0, f64::INFINITY, 3.0, 3.0, 3.0]).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn update_in_place() {
        let mut store = Store::seeded();
        store.add("A6 Starlink", [3.0; 5]).unwrap();
        store.update("A2 Biznet", [1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let provider = &store.list()[1];
        assert_eq!(provider.name, "A2 Biznet");
        assert_eq!(
            provider.score(Criterion::FupLimit),
            Value::new(4.0).unwrap()
        );
        assert_eq!(
            store.update("A9 Missing", [1.0; 5]),
            Err(Error::NotFound("A9 Missing".into()))
        );
    }

    #[test]
    fn remove_by_name() {
        let mut store = Store::seeded();
        let removed = store.remove("A3 MyRepublic").unwrap();
        assert_eq!(removed.name, "A3 MyRepublic");
        assert!(store.get("A3 MyRepublic").is_none());
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.remove("A3 MyRepublic"),
            Err(Error::NotFound("A3 MyRepublic".into()))
        );
    }

    #[test]
    fn rejections_are_logged() {
        let events = DebugEvents::default();
        let subscriber = Registry::default().with(events.clone());
        let mut store = Store::seeded();
        let before = store.clone();
        tracing::subscriber::with_default(subscriber, || {
            assert!(store.add("A2 Biznet", [3.0; 5]).is_err());
            assert!(store.update("A9 Missing", [3.0; 5]).is_err());
            assert!(store.update("A2 Biznet", [3.0, -1.0, 3.0, 3.0, 3.0]).is_err());
            assert!(store.remove("A9 Missing").is_err());
        });
        assert_eq!(*events.0.lock().unwrap(), 4);
        assert_eq!(store, before);
    }
}

use {
    crate::shapes::enums::ScreenActionEnum,
    crokey::*,
    serde::{Deserialize, Serialize},
    std::{
        collections::{HashMap, HashSet},
        fmt,
    },
};

/// A mapping from key combinations to actions.
///
/// Several key combinations can go to the same action. The serialized form
/// only carries `bindings`; the lookup map is filled by [`KeyBindings::slice`]
/// for the actions a screen actually offers.
#[derive(Clone, Deserialize, Serialize)]
pub struct KeyBindings {
    #[serde(skip)]
    map: HashMap<KeyCombination, ScreenActionEnum>,
    #[serde(flatten)]
    bindings: HashMap<ScreenActionEnum, HashSet<KeyCombination>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.set(ScreenActionEnum::Quit, key!(ctrl - q));
        bindings.set(ScreenActionEnum::Quit, key!(q));
        bindings.set(ScreenActionEnum::Back, key!(esc));
        bindings.set(ScreenActionEnum::Confirm, key!(enter));
        bindings.set(ScreenActionEnum::Up, key!(up));
        bindings.set(ScreenActionEnum::Down, key!(down));
        bindings.set(ScreenActionEnum::Next, key!(tab));
        bindings.set(ScreenActionEnum::Previous, key!(shift - backtab));
        bindings.set(ScreenActionEnum::Previous, key!(shift - tab));
        bindings.set(ScreenActionEnum::NextValue, key!(right));
        bindings.set(ScreenActionEnum::PreviousValue, key!(left));
        bindings.set(ScreenActionEnum::ApplyFilter, key!(f));
        bindings.set(ScreenActionEnum::ResetFilter, key!(r));
        bindings.set(ScreenActionEnum::New, key!(n));
        bindings.set(ScreenActionEnum::Edit, key!(e));
        bindings.set(ScreenActionEnum::Edit, key!(enter));
        bindings.set(ScreenActionEnum::Delete, key!(d));
        bindings.set(ScreenActionEnum::Reload, key!(l));
        bindings
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: HashMap::default(),
            bindings: HashMap::new(),
        }
    }

    pub fn set<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) -> bool {
        self.bindings.entry(action.into()).or_default().insert(ck)
    }

    fn set_to_map<A: Into<ScreenActionEnum>>(&mut self, action: A, ck: KeyCombination) {
        let action_enum = action.into();
        self.map.entry(ck).or_insert(action_enum);
    }

    pub fn get(&self, key: KeyCombination) -> Option<&ScreenActionEnum> {
        self.map.get(&key)
    }

    /// return the key combination for the action, choosing the one with the
    /// shortest Display representation.
    pub fn shortest_key_for(&self, action: &ScreenActionEnum) -> Option<(KeyCombination, String)> {
        let mut shortest: Option<(KeyCombination, String)> = None;
        let cks = self.bindings.get(action)?;
        for ck in cks {
            let s = ck.to_string();
            match &shortest {
                Some(previous) if previous.1.len() <= s.len() => {}
                _ => shortest = Some((*ck, s)),
            }
        }
        shortest.map(|(ck, _)| (ck, action.with_desc().1))
    }

    /// Bindings restricted to `actions`, with the lookup map populated.
    pub fn slice(&self, actions: &[ScreenActionEnum]) -> KeyBindings {
        let mut slice = KeyBindings::empty();
        for (action, cks) in &self.bindings {
            if actions.contains(action) {
                cks.iter().for_each(|ck| slice.set_to_map(*action, *ck));
            }
        }
        slice
    }
}

impl fmt::Debug for KeyBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("KeyBindings");
        for (action, cks) in &self.bindings {
            let keys: Vec<String> = cks.iter().map(|ck| ck.to_string()).collect();
            ds.field(&action.to_string(), &keys);
        }
        ds.finish()
    }
}

#[test]
fn test_deserialize_keybindings() {
    #[derive(Deserialize)]
    struct Config {
        keybindings: KeyBindings,
    }
    let json = r#"
    {
        "keybindings": {
            "apply_filter": ["ctrl-f"],
            "quit": ["q","ctrl-q"]
        }
    }
    "#;
    let conf = serde_json::from_str::<Config>(json).unwrap();
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Back),
        None,
    );
    assert_eq!(
        conf.keybindings.shortest_key_for(&ScreenActionEnum::Quit),
        Some((key!(q), "quit".into()))
    );
    assert_eq!(
        conf.keybindings
            .shortest_key_for(&ScreenActionEnum::ApplyFilter),
        Some((key!(ctrl - f), "apply filter".into()))
    );
}

#[test]
fn test_slice_only_resolves_offered_actions() {
    let slice = KeyBindings::default().slice(&[ScreenActionEnum::Confirm, ScreenActionEnum::Back]);
    assert_eq!(slice.get(key!(enter)), Some(&ScreenActionEnum::Confirm));
    assert_eq!(slice.get(key!(esc)), Some(&ScreenActionEnum::Back));
    assert_eq!(slice.get(key!(q)), None);
}

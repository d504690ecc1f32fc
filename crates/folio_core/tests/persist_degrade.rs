use folio_core::repo::override_repo::{KEY_EXPERIENCE, KEY_HERO_IMAGE, KEY_PROJECTS};
use folio_core::{
    ContactInfo, Experience, KeyValueStore, KvOverrideRepository, MemoryKeyValueStore,
    OverrideRepository, PortfolioData, PortfolioService, StoreError, StoreResult,
};

const PAGE_URL: &str = "https://folio.example/portfolio";

#[test]
fn corrupt_category_json_degrades_to_absent_and_is_reported() {
    let store = MemoryKeyValueStore::new();
    store.set(KEY_PROJECTS, "{definitely not a sequence").unwrap();
    store
        .set(KEY_EXPERIENCE, r#"[{"role":"Lead","company":"Initech","period":"2024","location":"Karawang","type":"Professional","achievements":[]}]"#)
        .unwrap();

    let repo = KvOverrideRepository::new(&store);
    let loaded = repo.load_state().unwrap();

    assert!(loaded.state.projects.is_empty());
    assert_eq!(loaded.state.experience.len(), 1);
    assert_eq!(loaded.issues.len(), 1);
    assert_eq!(loaded.issues[0].key, KEY_PROJECTS);
}

#[test]
fn a_session_opens_normally_over_corrupt_state() {
    let store = MemoryKeyValueStore::new();
    store.set(KEY_PROJECTS, "[[[").unwrap();

    let service = PortfolioService::open(sample_base(), KvOverrideRepository::new(&store), PAGE_URL);

    // The corrupt key renders as "no override"; base content is unaffected.
    let view = service.merged_view();
    assert_eq!(view.projects, service.base().projects);
}

#[test]
fn hero_key_is_raw_text_and_never_treated_as_corrupt() {
    let store = MemoryKeyValueStore::new();
    store.set(KEY_HERO_IMAGE, "not-a-data-uri-but-still-a-string").unwrap();

    let repo = KvOverrideRepository::new(&store);
    let loaded = repo.load_state().unwrap();

    assert_eq!(
        loaded.state.hero_image.as_deref(),
        Some("not-a-data-uri-but-still-a-string")
    );
    assert!(loaded.issues.is_empty());
}

#[test]
fn legacy_sequences_without_ids_load_with_generated_ids() {
    let store = MemoryKeyValueStore::new();
    store
        .set(
            KEY_EXPERIENCE,
            r#"[
                {"role":"Lead","company":"Initech","period":"2024","location":"Karawang","type":"Professional","achievements":["Shipped"]},
                {"role":"Architect","company":"Globex","period":"2023","location":"Bekasi","type":"Contract","achievements":[]}
            ]"#,
        )
        .unwrap();

    let repo = KvOverrideRepository::new(&store);
    let loaded = repo.load_state().unwrap();

    assert!(loaded.issues.is_empty());
    let entries = &loaded.state.experience;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].record.role, "Lead");
    assert_eq!(entries[1].record.role, "Architect");
    assert_ne!(entries[0].id, entries[1].id);
}

#[test]
fn failed_writes_keep_the_edit_in_memory_for_the_session() {
    let store = QuotaExhaustedStore::default();
    let mut service =
        PortfolioService::open(sample_base(), KvOverrideRepository::new(&store), PAGE_URL);

    let id = service.add_experience(experience("Lead", "Initech"));
    assert_eq!(service.override_state().experience[0].id, id);
    assert_eq!(service.merged_view().experience[0].role, "Lead");
    assert_eq!(service.revision(), 1);

    // Nothing reached the store, so a fresh session starts clean.
    let reloaded =
        PortfolioService::open(sample_base(), KvOverrideRepository::new(&store), PAGE_URL);
    assert!(reloaded.override_state().is_empty());
}

/// Store whose writes always fail, as when the backing quota is exhausted.
#[derive(Default)]
struct QuotaExhaustedStore {
    inner: MemoryKeyValueStore,
}

impl KeyValueStore for QuotaExhaustedStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Backend("quota exceeded".to_string()))
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.inner.remove(key)
    }
}

fn experience(role: &str, company: &str) -> Experience {
    Experience {
        role: role.to_string(),
        company: company.to_string(),
        period: "2024".to_string(),
        location: "Karawang".to_string(),
        kind: "Professional".to_string(),
        achievements: vec!["Shipped".to_string()],
        image: None,
    }
}

fn sample_base() -> PortfolioData {
    PortfolioData {
        name: "Dana Prasetyo".to_string(),
        headline: "Engineer".to_string(),
        summary: "Summary".to_string(),
        profile_image: "https://folio.example/profile.jpg".to_string(),
        contact: ContactInfo {
            email: "dana@folio.example".to_string(),
            phone: "+62".to_string(),
            linkedin: "linkedin.com/in/dana".to_string(),
            location: "Karawang".to_string(),
        },
        education: Vec::new(),
        experience: Vec::new(),
        skills: Vec::new(),
        certifications: Vec::new(),
        projects: vec![],
    }
}

use folio_core::repo::override_repo::{
    KEY_EXPERIENCE, KEY_HERO_IMAGE, KEY_PROJECTS, KEY_SKILLS,
};
use folio_core::{
    ContactInfo, Experience, KeyValueStore, KvOverrideRepository, MemoryKeyValueStore,
    PortfolioData, PortfolioService, Project, SkillGroup,
};
use uuid::Uuid;

const EDITOR_URL: &str = "https://folio.example/portfolio";
const RESTRICTED_URL: &str = "https://folio.example/portfolio?view=hr";

#[test]
fn empty_session_renders_exactly_the_base_dataset() {
    let store = MemoryKeyValueStore::new();
    let service = open_service(&store, EDITOR_URL);

    let view = service.merged_view();
    assert_eq!(view.experience.len(), 1);
    assert_eq!(view.experience[0].role, "Engineer");
    assert_eq!(view.experience[0].company, "Acme");
    assert_eq!(view.hero_image, service.base().profile_image);
}

#[test]
fn add_then_delete_returns_to_the_base_only_view() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);

    service.add_experience(experience("Lead", "Initech"));
    let roles: Vec<String> = service
        .merged_view()
        .experience
        .iter()
        .map(|e| e.role.clone())
        .collect();
    assert_eq!(roles, vec!["Lead".to_string(), "Engineer".to_string()]);

    assert!(service.delete_experience(0));
    let roles: Vec<String> = service
        .merged_view()
        .experience
        .iter()
        .map(|e| e.role.clone())
        .collect();
    assert_eq!(roles, vec!["Engineer".to_string()]);

    // The persisted override sequence is now empty, not absent.
    assert_eq!(store.get(KEY_EXPERIENCE).unwrap().as_deref(), Some("[]"));
}

#[test]
fn additions_prepend_newest_first_and_write_through() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);

    service.add_project(project("First"));
    service.add_project(project("Second"));

    let titles: Vec<String> = service
        .merged_view()
        .projects
        .iter()
        .map(|p| p.title.clone())
        .collect();
    assert_eq!(titles[0], "Second");
    assert_eq!(titles[1], "First");

    let persisted = store.get(KEY_PROJECTS).unwrap().unwrap();
    let second_at = persisted.find("Second").unwrap();
    let first_at = persisted.find("First").unwrap();
    assert!(second_at < first_at);
}

#[test]
fn out_of_range_delete_is_a_noop() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);

    service.add_skill_group(skill_group("Extra"));
    let revision = service.revision();

    assert!(!service.delete_skill_group(7));
    assert_eq!(service.revision(), revision);
    assert_eq!(service.merged_view().skills.len(), 2);

    // Base entries are never reachable through override deletion.
    assert!(!service.delete_experience(0));
    assert_eq!(service.merged_view().experience.len(), 1);
}

#[test]
fn delete_by_stable_id_targets_exactly_one_entry() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);

    let first = service.add_experience(experience("Lead", "Initech"));
    let second = service.add_experience(experience("Architect", "Globex"));

    assert!(service.delete_experience_by_id(first));
    let remaining: Vec<_> = service
        .override_state()
        .experience
        .iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(remaining, vec![second]);

    assert!(!service.delete_experience_by_id(Uuid::new_v4()));
    assert_eq!(service.override_state().experience.len(), 1);
}

#[test]
fn overrides_survive_a_session_reload() {
    let store = MemoryKeyValueStore::new();
    let added_id = {
        let mut service = open_service(&store, EDITOR_URL);
        service.set_hero_image("data:image/png;base64,AAAA".to_string());
        service.add_skill_group(skill_group("Robotics"))
    };

    let reloaded = open_service(&store, EDITOR_URL);
    assert_eq!(
        reloaded.merged_view().hero_image,
        "data:image/png;base64,AAAA"
    );
    assert_eq!(reloaded.override_state().skills.len(), 1);
    assert_eq!(reloaded.override_state().skills[0].id, added_id);
    assert_eq!(reloaded.override_state().skills[0].record.category, "Robotics");
}

#[test]
fn hero_reset_falls_back_to_the_base_profile_image() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);

    service.set_hero_image("data:image/png;base64,AAAA".to_string());
    assert_eq!(
        store.get(KEY_HERO_IMAGE).unwrap().as_deref(),
        Some("data:image/png;base64,AAAA")
    );

    service.reset_hero_image();
    assert_eq!(service.merged_view().hero_image, service.base().profile_image);
    assert_eq!(store.get(KEY_HERO_IMAGE).unwrap(), None);
}

#[test]
fn clear_all_removes_every_persisted_key_and_all_overrides() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);

    service.set_hero_image("data:image/png;base64,AAAA".to_string());
    service.add_experience(experience("Lead", "Initech"));
    service.add_project(project("Side Quest"));
    service.add_skill_group(skill_group("Robotics"));

    service.clear_all();

    for key in [KEY_HERO_IMAGE, KEY_EXPERIENCE, KEY_PROJECTS, KEY_SKILLS] {
        assert_eq!(store.get(key).unwrap(), None, "key {key} should be absent");
    }
    assert!(service.override_state().is_empty());

    let view = service.merged_view();
    assert_eq!(view.experience, service.base().experience);
    assert_eq!(view.projects, service.base().projects);
    assert_eq!(view.skills, service.base().skills);
    assert_eq!(view.hero_image, service.base().profile_image);
}

#[test]
fn revision_increases_on_every_mutation_and_holds_on_reads() {
    let store = MemoryKeyValueStore::new();
    let mut service = open_service(&store, EDITOR_URL);
    assert_eq!(service.revision(), 0);

    service.add_project(project("One"));
    assert_eq!(service.revision(), 1);

    service.set_hero_image("data:image/png;base64,AAAA".to_string());
    assert_eq!(service.revision(), 2);

    let _ = service.merged_view();
    let _ = service.share_link();
    assert_eq!(service.revision(), 2);

    service.clear_all();
    assert_eq!(service.revision(), 3);
}

#[test]
fn restricted_mode_is_derived_from_the_url_regardless_of_stored_state() {
    let store = MemoryKeyValueStore::new();
    {
        let mut editor = open_service(&store, EDITOR_URL);
        editor.add_experience(experience("Lead", "Initech"));
        assert!(!editor.is_restricted());
    }

    let restricted = open_service(&store, RESTRICTED_URL);
    assert!(restricted.is_restricted());
    // Stored overrides still render in restricted mode.
    assert_eq!(restricted.merged_view().experience.len(), 2);
}

#[test]
fn share_link_points_at_the_restricted_view() {
    let store = MemoryKeyValueStore::new();
    let service = open_service(&store, "https://folio.example/portfolio?tab=projects#top");
    assert_eq!(
        service.share_link(),
        "https://folio.example/portfolio?view=hr"
    );
}

fn open_service<'s>(
    store: &'s MemoryKeyValueStore,
    page_url: &str,
) -> PortfolioService<KvOverrideRepository<&'s MemoryKeyValueStore>> {
    PortfolioService::open(sample_base(), KvOverrideRepository::new(store), page_url)
}

fn experience(role: &str, company: &str) -> Experience {
    Experience {
        role: role.to_string(),
        company: company.to_string(),
        period: "2024 - Present".to_string(),
        location: "Karawang".to_string(),
        kind: "Professional".to_string(),
        achievements: vec!["Shipped the thing".to_string()],
        image: None,
    }
}

fn project(title: &str) -> Project {
    Project {
        title: title.to_string(),
        description: "A project".to_string(),
        year: "2025".to_string(),
        stack: vec!["Rust".to_string()],
        impact: None,
        image: None,
    }
}

fn skill_group(category: &str) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: vec!["One".to_string(), "Two".to_string()],
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
        experience: vec![experience("Engineer", "Acme")],
        skills: vec![skill_group("Software")],
        certifications: Vec::new(),
        projects: vec![project("Reject Tally Camera")],
    }
}

//! End-to-end editing sessions through the editor shell.

use theme_forge::app::controllers::preview::PreviewController;
use theme_forge::app::domain::{
    ChangeKind, EditorSettings, FontFamilyKind, PageId, PageKind, PagePatch, PreviewMessage,
    ScaleName, Shade,
};
use theme_forge::{EditorShell, ThemeConfiguration};

fn shell() -> (EditorShell, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let preview = PreviewController::with_output_dir(false, dir.path().to_path_buf());
    let shell =
        EditorShell::with_preview(ThemeConfiguration::default(), EditorSettings::default(), preview);
    (shell, dir)
}

#[test]
fn undo_two_edits_returns_to_default() {
    let (mut shell, _dir) = shell();
    shell.set_color(ScaleName::Primary, Shade::S500, "#ff0000");
    shell.set_font_family(FontFamilyKind::Sans, "Roboto, sans-serif");
    assert_eq!(shell.history().index(), 2);

    shell.undo();
    shell.undo();
    assert_eq!(shell.history().index(), 0);
    assert_eq!(shell.theme(), &ThemeConfiguration::default());

    assert!(shell.redo());
    assert_eq!(shell.theme().colors.primary.s500, "#ff0000");
}

#[test]
fn adding_a_page_stages_html_change() {
    let (mut shell, _dir) = shell();
    let id = shell.add_page("Pricing", "/pricing", PageKind::Landing).unwrap();

    assert_eq!(shell.theme().pages.len(), 4);
    let change = shell.staging().changes().last().unwrap();
    assert_eq!(change.kind, ChangeKind::Html);
    assert!(change.description.contains("Pricing"));

    shell.select_page("/pricing");
    assert_eq!(shell.selected_page().unwrap().id, id);
}

#[test]
fn commit_then_discard_changes_nothing() {
    let (mut shell, _dir) = shell();
    shell.set_custom_css("body { margin: 0; }");
    shell.update_page(&PageId::from("about"), PagePatch::html("<h1>About us</h1>"));
    shell.set_color(ScaleName::Secondary, Shade::S700, "#333333");

    let record = shell.commit("First release").unwrap();
    assert_eq!(record.message, "First release");
    let before = shell.staging().changes().to_vec();

    for id in &record.change_ids {
        assert!(!shell.discard(id));
    }
    assert_eq!(shell.staging().changes(), before.as_slice());
}

#[test]
fn empty_page_html_renders_placeholder() {
    let (mut shell, _dir) = shell();
    shell.select_page("/about");
    let doc = shell.preview();
    assert!(doc.contains("Welcome to My Store"));
    assert_eq!(doc.matches("feature-card").count(), 3);

    shell.update_page(&PageId::from("about"), PagePatch::html("<h1>About us</h1>"));
    let doc = shell.preview();
    assert!(doc.contains("<h1>About us</h1>"));
    assert!(!doc.contains("Welcome to My Store"));
}

#[test]
fn preview_navigation_round_trip() {
    let (mut shell, _dir) = shell();
    let bridge = shell.preview_bridge();
    std::thread::spawn(move || {
        bridge.post_message(&PreviewMessage::Navigate {
            url: "/contact".to_string(),
        });
    })
    .join()
    .unwrap();

    assert_eq!(shell.process_preview_messages(), 1);
    assert_eq!(shell.selected_slug(), "/contact");
    assert_eq!(shell.process_preview_messages(), 0);
}

#[test]
fn render_is_deterministic() {
    let (mut shell, _dir) = shell();
    shell.set_custom_js("console.log('hi');");
    assert_eq!(shell.preview(), shell.preview());
}

#[test]
fn export_import_across_sessions() {
    let (mut first, dir) = shell();
    first.set_custom_css(".hero { padding: 2rem; }");
    first.add_page("Blog", "", PageKind::Blog);
    let path = dir.path().join("store.json");
    first.save_to(&path).unwrap();

    let (mut second, _dir) = shell();
    second.load_from(&path).unwrap();
    assert_eq!(second.theme(), first.theme());
    assert!(second.theme().pages.find_by_slug("/blog").is_some());
    assert!(second.staging().is_empty());
    assert!(!second.history().can_undo());
}

use std::path::Path;

use markdown_chronicle_engine::vcs::{MAIN_BRANCH, VersionControl, VersionStore};
use pretty_assertions::assert_eq;

const KEY: &str = "journal/draft.md";

fn store_at(dir: &Path) -> VersionStore {
    VersionStore::new(dir.join(".chronicle"))
}

/// A full drafting session: commit on main, branch off, commit there,
/// merge back, then reopen from disk as a second process would.
#[test]
fn drafting_branching_and_merging_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let merge_commit = {
        let mut vc = VersionControl::open(store_at(dir.path()), KEY, "# Draft\n", "ada").unwrap();

        vc.set_working_text("# Draft\n\nopening line\n").unwrap();
        vc.commit("Add opening", "ada").unwrap().expect("commit");

        let dev = vc.create_branch("dev", "ada", None).unwrap().expect("branch");
        vc.switch_branch(dev).unwrap().expect("switch");
        vc.set_working_text("# Draft\n\nopening line\n\nmore detail\n")
            .unwrap();
        vc.commit("Expand", "ada").unwrap().expect("commit");

        let main = vc.resolve_branch(MAIN_BRANCH).expect("main branch").id;
        let merged = vc
            .merge_branch(dev, main, "Land dev", "ada")
            .unwrap()
            .expect("merge");

        // The longer side wins and the message names both branches.
        let commit = vc.state().commit(merged).expect("merge commit");
        assert_eq!(commit.message, "Land dev (Merge dev into main)");
        assert!(commit.content.contains("more detail"));
        merged
    };

    // A fresh open sees everything the first session wrote.
    let vc = VersionControl::open(store_at(dir.path()), KEY, "", "ada").unwrap();
    assert_eq!(vc.state().versions.len(), 4);

    let main = vc.resolve_branch(MAIN_BRANCH).expect("main branch");
    assert_eq!(main.last_commit, merge_commit);

    let names: Vec<_> = vc.state().branches.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["main", "dev"]);

    // The session is still on dev, where the first one left it; merging
    // moved the target branch pointer, not the checked-out version.
    assert_eq!(vc.current_branch().expect("current branch").name, "dev");
}

#[test]
fn tags_and_checkout_restore_old_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut vc = VersionControl::open(store_at(dir.path()), "note.md", "v one\n", "ada").unwrap();
    let seed = vc.state().current_version;

    vc.set_working_text("v two\n").unwrap();
    let second = vc.commit("Second", "ada").unwrap().expect("commit");
    assert!(vc.add_tag(second, "v2.0.0").unwrap());

    // The seed commit already carries v1.0.0.
    assert_eq!(vc.resolve_commit("v1.0.0").expect("tag lookup").id, seed);
    assert_eq!(vc.resolve_commit("v2.0.0").expect("tag lookup").id, second);

    let restored = vc.checkout(seed).unwrap().expect("checkout");
    assert_eq!(restored, "v one\n");
    assert_eq!(vc.working_text(), "v one\n");
    assert!(!vc.has_uncommitted_changes());

    // Checkout moves the version pointer, never the branch.
    assert_eq!(vc.current_branch().expect("current branch").name, MAIN_BRANCH);
}

/// Separate documents keep separate histories in the same store.
#[test]
fn documents_do_not_share_history() {
    let dir = tempfile::tempdir().unwrap();

    let mut first =
        VersionControl::open(store_at(dir.path()), "a.md", "alpha\n", "ada").unwrap();
    first.set_working_text("alpha changed\n").unwrap();
    first.commit("Change a", "ada").unwrap().expect("commit");

    let second = VersionControl::open(store_at(dir.path()), "b.md", "beta\n", "ada").unwrap();
    assert_eq!(second.state().versions.len(), 1);
    assert_eq!(second.working_text(), "beta\n");
}

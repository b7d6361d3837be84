//! In-process implementation of the graph store.
//!
//! Applies the same [`IngestPlan`] as the Neo4j path and answers the same
//! queries by walking adjacency maps. Backs the test suites and `--memory`
//! dry runs.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use sharescope_core::{
    BrowseEntry, DriveItem, EntryGrant, FolderListing, GranteeFile, GranteeSummary,
    GraphStatistics, GraphStore, InheritanceFinding, IngestReport, PublicItem, SharescopeError,
    SharescopeResult, DEFAULT_RESULT_LIMIT, ROOT_FOLDER_ID,
};

use crate::client::GraphCounts;
use crate::ingest::IngestPlan;

#[derive(Debug, Clone, Default)]
struct ItemNode {
    name: Option<String>,
    owner: Option<String>,
    web_view_link: Option<String>,
    mime_type: Option<String>,
    last_crawled_at: Option<String>,
}

#[derive(Debug, Clone)]
struct GranteeNode {
    email: String,
    kind: String,
}

#[derive(Debug, Clone)]
struct GrantEdge {
    role: String,
    inherited: bool,
}

#[derive(Debug, Default)]
struct GraphState {
    items: BTreeMap<String, ItemNode>,
    grantees: BTreeMap<String, GranteeNode>,
    /// (parent id, child id)
    contains: BTreeSet<(String, String)>,
    /// (grantee id, item id)
    grants: BTreeMap<(String, String), GrantEdge>,
}

impl GraphState {
    fn apply(&mut self, plan: &IngestPlan, crawled_at: &str) {
        for write in &plan.items {
            let node = self.items.entry(write.id.clone()).or_default();
            node.name = Some(write.name.clone());
            node.owner = Some(write.owner.clone());
            node.web_view_link = Some(write.web_view_link.clone());
            node.mime_type = Some(write.mime_type.clone());
            node.last_crawled_at = Some(crawled_at.to_string());
        }

        for (parent_id, child_id) in &plan.containment {
            self.items.entry(parent_id.clone()).or_default();
            self.contains.insert((parent_id.clone(), child_id.clone()));
        }

        for grant in &plan.grants {
            self.grantees.insert(
                grant.grantee_id.clone(),
                GranteeNode {
                    email: grant.email.clone(),
                    kind: grant.kind.clone(),
                },
            );
            self.grants.insert(
                (grant.grantee_id.clone(), grant.item_id.clone()),
                GrantEdge {
                    role: grant.role.clone(),
                    inherited: grant.inherited,
                },
            );
        }
    }

    fn children(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut out: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (parent, child) in &self.contains {
            out.entry(parent.as_str()).or_default().push(child.as_str());
        }
        out
    }

    fn roots(&self) -> Vec<&str> {
        let has_parent: HashSet<&str> = self.contains.iter().map(|(_, c)| c.as_str()).collect();
        self.items
            .keys()
            .map(String::as_str)
            .filter(|id| !has_parent.contains(id))
            .collect()
    }

    /// Distinct grantee emails with a direct grant on each item.
    fn direct_emails(&self) -> BTreeMap<&str, BTreeSet<&str>> {
        let mut emails: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (grantee_id, item_id) in self.grants.keys() {
            if let Some(grantee) = self.grantees.get(grantee_id) {
                emails.entry(item_id.as_str()).or_default().insert(grantee.email.as_str());
            }
        }
        emails
    }

    fn item_name(&self, id: &str) -> String {
        self.items.get(id).and_then(|n| n.name.clone()).unwrap_or_default()
    }

    fn item_link(&self, id: &str) -> String {
        self.items.get(id).and_then(|n| n.web_view_link.clone()).unwrap_or_default()
    }

    fn browse_entry(&self, id: &str, children: &BTreeMap<&str, Vec<&str>>) -> BrowseEntry {
        let permissions = self
            .grants
            .iter()
            .filter(|((_, item_id), _)| item_id == id)
            .filter_map(|((grantee_id, _), edge)| {
                self.grantees.get(grantee_id).map(|g| EntryGrant {
                    kind: g.kind.clone(),
                    email: g.email.clone(),
                    role: edge.role.clone(),
                })
            })
            .collect();

        BrowseEntry {
            id: id.to_string(),
            name: self.item_name(id),
            is_folder: children.contains_key(id),
            permissions,
        }
    }
}

/// Graph store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    state: RwLock<GraphState>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node and relationship counts, as `GraphClient::get_counts` reports them.
    pub async fn counts(&self) -> GraphCounts {
        let state = self.state.read().await;
        GraphCounts {
            nodes: state.items.len() + state.grantees.len(),
            relationships: state.contains.len() + state.grants.len(),
        }
    }

    /// The stored provider inheritance flag of one grant.
    pub async fn grant_inherited(&self, grantee_id: &str, item_id: &str) -> Option<bool> {
        let state = self.state.read().await;
        state
            .grants
            .get(&(grantee_id.to_string(), item_id.to_string()))
            .map(|edge| edge.inherited)
    }

    /// Mime type stored on an item, `None` for unknown ids and placeholders.
    pub async fn item_mime_type(&self, item_id: &str) -> Option<String> {
        let state = self.state.read().await;
        state.items.get(item_id).and_then(|n| n.mime_type.clone())
    }

    /// Latest crawl stamp across all items.
    pub async fn last_crawled_at(&self) -> Option<String> {
        let state = self.state.read().await;
        state.items.values().filter_map(|n| n.last_crawled_at.clone()).max()
    }
}

#[async_trait]
impl GraphStore for MemoryGraph {
    async fn ingest(&self, items: &[DriveItem], crawled_at: &str) -> SharescopeResult<IngestReport> {
        let plan = IngestPlan::from_items(items);
        // The write lock is held for the whole batch.
        let mut state = self.state.write().await;
        state.apply(&plan, crawled_at);
        Ok(plan.report())
    }

    async fn public_exposure(&self, limit: usize) -> SharescopeResult<Vec<PublicItem>> {
        let limit = limit.min(DEFAULT_RESULT_LIMIT);
        let state = self.state.read().await;
        let public_ids: BTreeSet<&str> = state
            .grants
            .keys()
            .filter(|(grantee_id, _)| {
                state.grantees.get(grantee_id).is_some_and(|g| g.kind == "anyone")
            })
            .map(|(_, item_id)| item_id.as_str())
            .collect();

        Ok(public_ids
            .into_iter()
            .take(limit)
            .map(|id| {
                let node = state.items.get(id).cloned().unwrap_or_default();
                PublicItem {
                    id: id.to_string(),
                    name: node.name.unwrap_or_default(),
                    owner: node.owner.unwrap_or_else(|| "unknown".to_string()),
                    web_view_link: node.web_view_link.unwrap_or_default(),
                }
            })
            .collect())
    }

    async fn broken_inheritance(&self, limit: usize) -> SharescopeResult<Vec<InheritanceFinding>> {
        let limit = limit.min(DEFAULT_RESULT_LIMIT);
        let state = self.state.read().await;
        let children = state.children();
        let emails = state.direct_emails();
        let none: BTreeSet<&str> = BTreeSet::new();

        let mut findings = Vec::new();
        let mut evaluated: HashSet<(&str, &str)> = HashSet::new();

        for root in state.roots() {
            let Some(top_folders) = children.get(root) else {
                continue;
            };
            for &top in top_folders {
                // Only folders anchor the comparison.
                if !children.contains_key(top) {
                    continue;
                }
                let top_emails = emails.get(top).unwrap_or(&none);
                let top_name = state.item_name(top);

                for descendant in descendants(&children, top) {
                    if !evaluated.insert((top, descendant)) {
                        continue;
                    }
                    let Some(child_emails) = emails.get(descendant) else {
                        continue;
                    };
                    for extra in child_emails.difference(top_emails) {
                        if findings.len() >= limit {
                            return Ok(findings);
                        }
                        findings.push(InheritanceFinding {
                            name: state.item_name(descendant),
                            link: state.item_link(descendant),
                            extra_user: extra.to_string(),
                            parent_name: top_name.clone(),
                            top_level_folder: top_name.clone(),
                        });
                    }
                }
            }
        }

        Ok(findings)
    }

    async fn statistics(&self) -> SharescopeResult<GraphStatistics> {
        let state = self.state.read().await;
        let folders: BTreeSet<&str> = state.contains.iter().map(|(p, _)| p.as_str()).collect();
        Ok(GraphStatistics::from_counts(
            state.items.len() as u64,
            folders.len() as u64,
            state.grantees.len() as u64,
            state.grants.len() as u64,
        ))
    }

    async fn grantee_summary(&self) -> SharescopeResult<Vec<GranteeSummary>> {
        let state = self.state.read().await;
        let mut reach: BTreeMap<(&str, &str), BTreeSet<&str>> = BTreeMap::new();
        for (grantee_id, item_id) in state.grants.keys() {
            if let Some(g) = state.grantees.get(grantee_id) {
                reach
                    .entry((g.email.as_str(), g.kind.as_str()))
                    .or_default()
                    .insert(item_id.as_str());
            }
        }

        let mut summary: Vec<GranteeSummary> = reach
            .into_iter()
            .map(|((email, kind), items)| GranteeSummary {
                email: email.to_string(),
                kind: kind.to_string(),
                file_count: items.len() as u64,
            })
            .collect();
        summary.sort_by(|a, b| b.file_count.cmp(&a.file_count).then_with(|| a.email.cmp(&b.email)));
        Ok(summary)
    }

    async fn grantee_files(&self, email: &str) -> SharescopeResult<Vec<GranteeFile>> {
        let email = email.trim();
        if email.is_empty() {
            return Err(SharescopeError::validation("grantee email is required"));
        }

        let state = self.state.read().await;
        let mut files: Vec<GranteeFile> = state
            .grants
            .iter()
            .filter(|((grantee_id, _), _)| {
                state.grantees.get(grantee_id).is_some_and(|g| g.email == email)
            })
            .map(|((_, item_id), edge)| GranteeFile {
                id: item_id.clone(),
                name: state.item_name(item_id),
                web_view_link: state.item_link(item_id),
                role: edge.role.clone(),
            })
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(files)
    }

    async fn browse_folder(&self, folder_id: &str) -> SharescopeResult<FolderListing> {
        let state = self.state.read().await;
        let children = state.children();

        let parents: Vec<&str> = if folder_id == ROOT_FOLDER_ID {
            state.roots()
        } else {
            vec![folder_id]
        };
        let child_ids: BTreeSet<&str> = parents
            .iter()
            .filter_map(|p| children.get(p))
            .flatten()
            .copied()
            .collect();

        let mut entries: Vec<BrowseEntry> = child_ids
            .into_iter()
            .map(|id| state.browse_entry(id, &children))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(FolderListing::from_entries(entries))
    }
}

/// Items reachable from `start` through one or more containment edges.
fn descendants<'a>(children: &BTreeMap<&'a str, Vec<&'a str>>, start: &'a str) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();
    let mut stack: Vec<&str> = children.get(start).map(|c| c.iter().rev().copied().collect()).unwrap_or_default();

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        order.push(id);
        if let Some(next) = children.get(id) {
            stack.extend(next.iter().rev().copied());
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharescope_core::{Owner, Permission, FOLDER_MIME_TYPE};

    const NOW: &str = "2026-10-15T09:00:00+00:00";

    fn node(id: &str, name: &str, mime: &str, parent: Option<&str>, grants: Vec<Permission>) -> DriveItem {
        DriveItem {
            id: id.to_string(),
            name: name.to_string(),
            mime_type: mime.to_string(),
            owners: vec![Owner {
                email_address: Some("owner@x.com".to_string()),
                display_name: None,
            }],
            web_view_link: Some(format!("https://drive/{}", id)),
            parents: parent.map(|p| vec![p.to_string()]).unwrap_or_default(),
            permissions: grants,
        }
    }

    fn folder(id: &str, name: &str, parent: Option<&str>, grants: Vec<Permission>) -> DriveItem {
        node(id, name, FOLDER_MIME_TYPE, parent, grants)
    }

    fn file(id: &str, name: &str, parent: Option<&str>, grants: Vec<Permission>) -> DriveItem {
        node(id, name, "text/plain", parent, grants)
    }

    fn user(id: &str, email: &str) -> Permission {
        Permission {
            id: Some(id.to_string()),
            kind: Some("user".to_string()),
            role: Some("reader".to_string()),
            email_address: Some(email.to_string()),
            ..Default::default()
        }
    }

    fn anyone() -> Permission {
        Permission {
            id: Some("anyoneWithLink".to_string()),
            kind: Some("anyone".to_string()),
            role: Some("reader".to_string()),
            ..Default::default()
        }
    }

    fn three_level() -> Vec<DriveItem> {
        vec![
            folder("A", "FolderA", Some("root"), vec![user("p-alice", "alice@x.com")]),
            folder("B", "FolderB", Some("A"), Vec::new()),
            file(
                "f1",
                "file.txt",
                Some("B"),
                vec![user("p-alice", "alice@x.com"), user("p-bob", "bob@y.com")],
            ),
        ]
    }

    #[tokio::test]
    async fn test_ingest_is_idempotent() {
        let store = MemoryGraph::new();
        let items = three_level();

        store.ingest(&items, NOW).await.unwrap();
        let once = store.counts().await;
        let stats_once = store.statistics().await.unwrap();

        store.ingest(&items, NOW).await.unwrap();
        assert_eq!(store.counts().await, once);
        assert_eq!(store.statistics().await.unwrap(), stats_once);
    }

    #[tokio::test]
    async fn test_reingest_overwrites_attributes() {
        let store = MemoryGraph::new();
        store.ingest(&three_level(), NOW).await.unwrap();

        let mut renamed = three_level();
        renamed[2].name = "final.txt".to_string();
        renamed[2].mime_type = "application/pdf".to_string();
        store.ingest(&renamed, "2026-10-16T09:00:00+00:00").await.unwrap();

        let files = store.grantee_files("bob@y.com").await.unwrap();
        assert_eq!(files[0].name, "final.txt");
        assert_eq!(store.item_mime_type("f1").await.as_deref(), Some("application/pdf"));
        assert_eq!(store.last_crawled_at().await.as_deref(), Some("2026-10-16T09:00:00+00:00"));
    }

    #[tokio::test]
    async fn test_superset_ingest_keeps_prior_state() {
        let store = MemoryGraph::new();
        store.ingest(&three_level(), NOW).await.unwrap();

        let mut more = three_level();
        more.push(file("f2", "extra.txt", Some("A"), Vec::new()));
        store.ingest(&more, NOW).await.unwrap();

        let stats = store.statistics().await.unwrap();
        assert_eq!(stats.total_files, 5);
        assert_eq!(stats.permission_count, 3);
    }

    #[tokio::test]
    async fn test_empty_graph_statistics_are_zero() {
        let store = MemoryGraph::new();
        assert_eq!(store.statistics().await.unwrap(), GraphStatistics::default());
        assert!(store.public_exposure(100).await.unwrap().is_empty());
        assert!(store.broken_inheritance(100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_statistics_invariant() {
        let store = MemoryGraph::new();
        store.ingest(&three_level(), NOW).await.unwrap();
        let stats = store.statistics().await.unwrap();
        assert_eq!(stats.folder_count + stats.file_count, stats.total_files);
        assert_eq!(stats.folder_count, 3);
        assert_eq!(stats.file_count, 1);
        assert_eq!(stats.user_count, 2);
        assert_eq!(stats.permission_count, 3);
    }

    #[tokio::test]
    async fn test_public_exposure_lists_item_once() {
        let store = MemoryGraph::new();
        store
            .ingest(
                &[
                    file(
                        "pub",
                        "press.pdf",
                        Some("root"),
                        vec![anyone(), user("p-a", "a@x.com"), user("p-b", "b@x.com")],
                    ),
                    file("priv", "private.txt", Some("root"), Vec::new()),
                    file("named", "named.txt", Some("root"), vec![user("p-a", "a@x.com")]),
                ],
                NOW,
            )
            .await
            .unwrap();

        let public = store.public_exposure(100).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, "pub");
        assert_eq!(public[0].owner, "owner@x.com");
    }

    #[tokio::test]
    async fn test_public_exposure_is_capped() {
        let store = MemoryGraph::new();
        let items: Vec<DriveItem> = (0..120)
            .map(|i| file(&format!("f{:03}", i), "shared", Some("root"), vec![anyone()]))
            .collect();
        store.ingest(&items, NOW).await.unwrap();
        assert_eq!(store.public_exposure(100).await.unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_larger_limits_stay_capped() {
        let store = MemoryGraph::new();
        let mut items = vec![folder("T", "Top", Some("root"), Vec::new())];
        items.extend((0..250).map(|i| file(&format!("f{:03}", i), "shared", Some("T"), vec![anyone()])));
        store.ingest(&items, NOW).await.unwrap();

        assert_eq!(store.public_exposure(1000).await.unwrap().len(), 100);
        assert_eq!(store.public_exposure(usize::MAX).await.unwrap().len(), 100);
        assert_eq!(store.broken_inheritance(1000).await.unwrap().len(), 100);
        assert_eq!(store.public_exposure(10).await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_three_level_broken_inheritance() {
        let store = MemoryGraph::new();
        store.ingest(&three_level(), NOW).await.unwrap();

        let findings = store.broken_inheritance(100).await.unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].name, "file.txt");
        assert_eq!(findings[0].link, "https://drive/f1");
        assert_eq!(findings[0].extra_user, "bob@y.com");
        assert_eq!(findings[0].parent_name, "FolderA");
        assert_eq!(findings[0].top_level_folder, "FolderA");
    }

    #[tokio::test]
    async fn test_one_row_per_extra_grantee() {
        let store = MemoryGraph::new();
        store
            .ingest(
                &[
                    folder("T", "Team", Some("root"), vec![user("p-a", "a@x.com")]),
                    file(
                        "d",
                        "doc",
                        Some("T"),
                        vec![user("p-a", "a@x.com"), user("p-b", "b@x.com"), user("p-c", "c@x.com")],
                    ),
                    file("ok", "subset", Some("T"), vec![user("p-a", "a@x.com")]),
                ],
                NOW,
            )
            .await
            .unwrap();

        let findings = store.broken_inheritance(100).await.unwrap();
        let extra: Vec<&str> = findings.iter().map(|f| f.extra_user.as_str()).collect();
        assert_eq!(extra, vec!["b@x.com", "c@x.com"]);
        assert!(findings.iter().all(|f| f.name == "doc"));
    }

    #[tokio::test]
    async fn test_comparison_anchors_on_top_level_folder() {
        // The immediate parent grants bob, the top-level folder does not.
        let store = MemoryGraph::new();
        store
            .ingest(
                &[
                    folder("T", "Top", Some("root"), vec![user("p-a", "a@x.com")]),
                    folder("M", "Mid", Some("T"), vec![user("p-a", "a@x.com"), user("p-b", "b@x.com")]),
                    file("leaf", "leaf.txt", Some("M"), vec![user("p-b", "b@x.com")]),
                ],
                NOW,
            )
            .await
            .unwrap();

        let findings = store.broken_inheritance(100).await.unwrap();
        let names: Vec<&str> = findings.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Mid", "leaf.txt"]);
        assert!(findings.iter().all(|f| f.top_level_folder == "Top"));
    }

    #[tokio::test]
    async fn test_inherited_flag_is_ignored() {
        let mut bob = user("p-bob", "bob@y.com");
        bob.inherited = Some(true);
        let store = MemoryGraph::new();
        store
            .ingest(
                &[
                    folder("T", "Top", Some("root"), Vec::new()),
                    file("f", "f.txt", Some("T"), vec![bob]),
                ],
                NOW,
            )
            .await
            .unwrap();

        assert_eq!(store.grant_inherited("p-bob", "f").await, Some(true));
        assert_eq!(store.broken_inheritance(100).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_multi_parent_item_reported_per_top_level_folder() {
        let mut shared = file("s", "shared.txt", Some("X"), vec![user("p-e", "eve@z.com")]);
        shared.parents.push("Y".to_string());
        let store = MemoryGraph::new();
        store
            .ingest(
                &[
                    folder("X", "Sales", Some("root"), Vec::new()),
                    folder("Y", "Legal", Some("root"), Vec::new()),
                    shared,
                ],
                NOW,
            )
            .await
            .unwrap();

        let findings = store.broken_inheritance(100).await.unwrap();
        let tops: BTreeSet<&str> = findings.iter().map(|f| f.top_level_folder.as_str()).collect();
        assert_eq!(findings.len(), 2);
        assert_eq!(tops, BTreeSet::from(["Legal", "Sales"]));
    }

    #[tokio::test]
    async fn test_files_directly_under_root_are_not_anchors() {
        let store = MemoryGraph::new();
        store
            .ingest(&[file("f", "loose.txt", Some("root"), vec![user("p-b", "b@x.com")])], NOW)
            .await
            .unwrap();
        assert!(store.broken_inheritance(100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_broken_inheritance_is_capped() {
        let mut items = vec![folder("T", "Top", Some("root"), Vec::new())];
        for i in 0..60 {
            items.push(file(
                &format!("f{}", i),
                "f",
                Some("T"),
                vec![user("p-a", "a@x.com"), user("p-b", "b@x.com")],
            ));
        }
        let store = MemoryGraph::new();
        store.ingest(&items, NOW).await.unwrap();
        assert_eq!(store.broken_inheritance(100).await.unwrap().len(), 100);
    }

    #[tokio::test]
    async fn test_cyclic_containment_terminates() {
        let mut a = folder("A", "A", Some("root"), Vec::new());
        a.parents.push("B".to_string());
        let store = MemoryGraph::new();
        store
            .ingest(&[a, folder("B", "B", Some("A"), vec![user("p-b", "b@x.com")])], NOW)
            .await
            .unwrap();
        let findings = store.broken_inheritance(100).await.unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].name, "B");
    }

    #[tokio::test]
    async fn test_grantee_summary_and_files() {
        let store = MemoryGraph::new();
        store.ingest(&three_level(), NOW).await.unwrap();

        let summary = store.grantee_summary().await.unwrap();
        assert_eq!(summary[0].email, "alice@x.com");
        assert_eq!(summary[0].file_count, 2);
        assert_eq!(summary[1].email, "bob@y.com");
        assert_eq!(summary[1].file_count, 1);

        let files = store.grantee_files("alice@x.com").await.unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["FolderA", "file.txt"]);
        assert!(matches!(
            store.grantee_files(" ").await,
            Err(SharescopeError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_browse_root_and_folder() {
        let store = MemoryGraph::new();
        store.ingest(&three_level(), NOW).await.unwrap();

        let top = store.browse_folder("root").await.unwrap();
        assert_eq!(top.folders.len(), 1);
        assert_eq!(top.folders[0].name, "FolderA");
        assert_eq!(top.folders[0].permissions[0].email, "alice@x.com");
        assert!(top.files.is_empty());

        let inner = store.browse_folder("B").await.unwrap();
        assert!(inner.folders.is_empty());
        assert_eq!(inner.files[0].id, "f1");
        assert_eq!(inner.files[0].permissions.len(), 2);

        assert!(store.browse_folder("missing").await.unwrap().is_empty());
    }
}

use super::*;

const ALL_STYLES: [HostStyle; 6] = [
    HostStyle::GitHub,
    HostStyle::GitLab,
    HostStyle::Gitea,
    HostStyle::BitBucket,
    HostStyle::Cgit,
    HostStyle::SourceHut,
];

fn request(host: &str, lines: Option<LineRange>) -> LinkRequest {
    LinkRequest {
        host: host.into(),
        port: None,
        repository: "o/r".into(),
        revision: Some("abcd123".into()),
        file: Some("a/b.lua".into()),
        lines,
    }
}

fn lines(a: u32, b: u32) -> Option<LineRange> {
    LineRange::new(a, b)
}

#[test]
fn test_line_range_normalizes_order() {
    let r = LineRange::new(20, 10).unwrap();
    assert_eq!((r.start(), r.end()), (10, 20));
    assert!(!r.is_single());
    assert!(LineRange::single(42).unwrap().is_single());
}

#[test]
fn test_line_range_rejects_zero() {
    assert!(LineRange::new(0, 3).is_none());
    assert!(LineRange::single(0).is_none());
}

#[test]
fn test_github_range() {
    let url = HostStyle::GitHub.format(&request("github.com", lines(10, 20)));
    assert_eq!(url, "https://github.com/o/r/blob/abcd123/a/b.lua#L10-L20");
}

#[test]
fn test_gitlab_range() {
    let url = HostStyle::GitLab.format(&request("gitlab.com", lines(10, 20)));
    assert_eq!(url, "https://gitlab.com/o/r/-/blob/abcd123/a/b.lua#L10-20");
}

#[test]
fn test_bitbucket_range() {
    let url = HostStyle::BitBucket.format(&request("bitbucket.org", lines(10, 20)));
    assert_eq!(url, "https://bitbucket.org/o/r/src/abcd123/a/b.lua#lines-10:20");
}

#[test]
fn test_gitea_range() {
    let url = HostStyle::Gitea.format(&request("codeberg.org", lines(10, 20)));
    insta::assert_snapshot!(url, @"https://codeberg.org/o/r/src/commit/abcd123/a/b.lua#L10-L20");
}

#[test]
fn test_sourcehut_range() {
    let mut req = request("git.sr.ht", lines(10, 20));
    req.repository = "~o/r".into();
    let url = HostStyle::SourceHut.format(&req);
    insta::assert_snapshot!(url, @"https://git.sr.ht/~o/r/tree/abcd123/item/a/b.lua#L10-20");
}

#[test]
fn test_cgit_forces_git_suffix_and_ignores_end() {
    let url = HostStyle::Cgit.format(&request("git.kernel.org", lines(10, 20)));
    insta::assert_snapshot!(url, @"https://git.kernel.org/o/r.git/tree/a/b.lua?id=abcd123#n10");

    let mut req = request("git.kernel.org", None);
    req.repository = "o/r.git".into();
    let url = HostStyle::Cgit.format(&req);
    assert_eq!(url, "https://git.kernel.org/o/r.git/tree/a/b.lua?id=abcd123");
}

#[test]
fn test_no_lines_means_no_anchor() {
    for style in ALL_STYLES {
        let url = style.format(&request("example.com", None));
        assert!(!url.contains('#'), "{style}: {url}");
        assert!(url.contains("a/b.lua"), "{style}: {url}");
    }
}

#[test]
fn test_equal_bounds_degenerate_to_single_line() {
    let expected = [
        (HostStyle::GitHub, "#L42"),
        (HostStyle::GitLab, "#L42"),
        (HostStyle::Gitea, "#L42"),
        (HostStyle::BitBucket, "#lines-42"),
        (HostStyle::Cgit, "#n42"),
        (HostStyle::SourceHut, "#L42"),
    ];
    for (style, anchor) in expected {
        let url = style.format(&request("example.com", lines(42, 42)));
        assert!(url.ends_with(anchor), "{style}: {url}");
    }
}

#[test]
fn test_repository_only_mode() {
    for style in ALL_STYLES {
        let mut req = request("example.com", lines(1, 2));
        req.revision = None;
        let url = style.format(&req);
        if style == HostStyle::Cgit {
            assert_eq!(url, "https://example.com/o/r.git");
        } else {
            assert_eq!(url, "https://example.com/o/r");
        }
    }

    let mut req = request("github.com", None);
    req.file = None;
    assert_eq!(HostStyle::GitHub.format(&req), "https://github.com/o/r");
}

#[test]
fn test_port_in_base_url() {
    let mut req = request("git.example.com", lines(3, 3));
    req.port = Some("8443".into());
    let url = HostStyle::GitLab.format(&req);
    assert_eq!(url, "https://git.example.com:8443/o/r/-/blob/abcd123/a/b.lua#L3");
}

#[test]
fn test_builtin_registry_matches_known_hosts() {
    let registry = HostRegistry::builtin();
    let url = registry.format(&request("gitlab.com", lines(10, 20))).unwrap();
    assert!(url.ends_with("#L10-20"));
    let url = registry.format(&request("codeberg.org", None)).unwrap();
    assert!(url.contains("/src/commit/"));
}

#[test]
fn test_builtin_registry_is_case_sensitive() {
    let registry = HostRegistry::builtin();
    let err = registry.format(&request("GitHub.com", None)).unwrap_err();
    assert!(matches!(err, LinkError::NoHostMatch { ref host } if host == "GitHub.com"));
}

#[test]
fn test_unknown_host_is_an_error() {
    let err = HostRegistry::builtin()
        .format(&request("git.example.com", None))
        .unwrap_err();
    assert_eq!(err.to_string(), "no URL generator matched host git.example.com");
}

#[test]
fn test_first_match_wins() {
    let mut registry = HostRegistry::new();
    registry.push(r"example\.com$", HostStyle::GitHub.formatter()).unwrap();
    registry.push(r"^git\.example\.com$", HostStyle::GitLab.formatter()).unwrap();

    let url = registry.format(&request("git.example.com", lines(1, 2))).unwrap();
    assert!(url.ends_with("/blob/abcd123/a/b.lua#L1-L2"), "{url}");
}

#[test]
fn test_user_rules_precede_builtin() {
    let rules = [HostRule {
        pattern: r"^github\.com$".into(),
        style: HostStyle::Gitea,
    }];
    let registry = HostRegistry::with_rules(&rules).unwrap();
    assert_eq!(registry.len(), BUILTIN_RULES.len() + 1);

    let url = registry.format(&request("github.com", lines(5, 5))).unwrap();
    assert_eq!(url, "https://github.com/o/r/src/commit/abcd123/a/b.lua#L5");
}

#[test]
fn test_custom_formatter() {
    let mut registry = HostRegistry::new();
    registry
        .push(
            "^internal$",
            Arc::new(|req: &LinkRequest| format!("https://code/{}", req.repository)),
        )
        .unwrap();
    assert_eq!(registry.format(&request("internal", None)).unwrap(), "https://code/o/r");
}

#[test]
fn test_invalid_pattern() {
    let err = HostRegistry::with_rules(&[HostRule {
        pattern: "(".into(),
        style: HostStyle::GitHub,
    }])
    .unwrap_err();
    assert!(matches!(err, LinkError::HostPattern { .. }));
}

#[test]
fn test_builtin_rules_mirror_registry_order() {
    let rules = builtin_rules();
    assert_eq!(rules.len(), HostRegistry::builtin().len());
    assert_eq!(rules[0].style, HostStyle::GitHub);
    assert_eq!(rules.last().unwrap().style, HostStyle::Cgit);
}

use directory_core::{
    categories, filter_channels, Catalog, CategoryFilter, ChannelId, ChannelRecord, QueryCache,
    QueryState,
};
use pretty_assertions::assert_eq;

fn ids(channels: &[&ChannelRecord]) -> Vec<ChannelId> {
    channels.iter().map(|channel| channel.id).collect()
}

fn run(search: &str, category: &str) -> Vec<ChannelId> {
    let query = QueryState::new(search, CategoryFilter::from_label(category));
    ids(&filter_channels(Catalog::default(), &query))
}

fn names(search: &str, category: &str) -> Vec<&'static str> {
    let query = QueryState::new(search, CategoryFilter::from_label(category));
    filter_channels(Catalog::default(), &query)
        .into_iter()
        .map(|channel| channel.name)
        .collect()
}

const SEARCHES: &[&str] = &[
    "", "n", "ne", "new", "news", "news ", "CNN", "cnn", "BuSiNeSs", "journalism", "inter",
    "international", "public", "zzz-no-match", " ", "24", "World",
];

#[test]
fn empty_query_returns_whole_catalog_in_order() {
    assert_eq!(run("", "All"), (1..=18).collect::<Vec<_>>());
}

#[test]
fn news_matches_names_and_descriptions() {
    let found = names("news", "All");
    assert!(found.contains(&"BBC News"));
    assert!(found.contains(&"NBC News"));
    // Matched through its description, "International news agency".
    assert!(found.contains(&"Reuters"));
    assert!(!found.contains(&"Bloomberg"));
    assert!(!found.contains(&"NHK World"));
    assert_eq!(
        run("news", "All"),
        vec![1, 2, 3, 6, 7, 8, 9, 11, 12, 14, 15, 16, 17]
    );
}

#[test]
fn business_category_alone() {
    assert_eq!(
        names("", "Business"),
        vec!["Financial Times", "Bloomberg", "CNBC"]
    );
}

#[test]
fn no_match_is_empty_not_error() {
    assert!(run("zzz-no-match", "All").is_empty());
}

#[test]
fn category_and_text_combine() {
    assert_eq!(names("public", "US"), vec!["NPR"]);
    assert!(run("public", "Global").is_empty());
}

#[test]
fn text_match_ignores_case() {
    assert_eq!(run("cnn", "All"), run("CNN", "All"));
    assert_eq!(run("cnn", "All"), vec![1]);
    assert_eq!(run("bUsInEsS", "All"), run("business", "All"));
}

#[test]
fn category_match_respects_case() {
    assert!(run("", "business").is_empty());
    assert!(run("", "us").is_empty());
}

#[test]
fn search_text_is_not_trimmed() {
    // "news " only matches where a space follows "news".
    assert_eq!(
        names("news ", "All"),
        vec![
            "CNN",
            "BBC News",
            "Reuters",
            "Fox News",
            "CBS News",
            "Sky News",
            "CNBC",
            "Associated Press",
        ]
    );
}

#[test]
fn derived_categories_start_with_all_and_follow_first_occurrence() {
    assert_eq!(
        categories(Catalog::default()),
        vec!["All", "Global", "US", "UK", "Business"]
    );
}

#[test]
fn derived_categories_for_custom_catalog() {
    static TINY: &[ChannelRecord] = &[
        ChannelRecord {
            id: 7,
            name: "Zeta",
            url: "https://zeta.example",
            category: "Science",
            description: "Lab notes",
        },
        ChannelRecord {
            id: 3,
            name: "Alpha",
            url: "https://alpha.example",
            category: "Arts",
            description: "Gallery news",
        },
        ChannelRecord {
            id: 9,
            name: "Beta",
            url: "https://beta.example",
            category: "Science",
            description: "Field reports",
        },
    ];
    let catalog = Catalog::new(TINY);
    let labels = categories(catalog);
    assert_eq!(labels, vec!["All", "Science", "Arts"]);

    let query = QueryState::new("", CategoryFilter::from_label("Science"));
    assert_eq!(ids(&filter_channels(catalog, &query)), vec![7, 9]);
}

#[test]
fn every_category_is_listed_once() {
    let labels = categories(Catalog::default());
    assert_eq!(labels[0], "All");
    for (i, label) in labels.iter().enumerate() {
        assert!(!labels[i + 1..].contains(label), "duplicate label {label}");
    }
    for channel in Catalog::default().channels() {
        assert!(labels.contains(&channel.category));
    }
}

#[test]
fn results_are_order_preserving_subsequences() {
    let all: Vec<ChannelId> = run("", "All");
    for category in categories(Catalog::default()) {
        for search in SEARCHES {
            let found = run(search, category);
            let positions: Vec<usize> = found
                .iter()
                .map(|id| all.iter().position(|other| other == id).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|pair| pair[0] < pair[1]),
                "{search:?} in {category} broke catalog order: {found:?}"
            );
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    for category in categories(Catalog::default()) {
        for search in SEARCHES {
            assert_eq!(run(search, category), run(search, category));
        }
    }
}

#[test]
fn appending_characters_never_widens_results() {
    for category in categories(Catalog::default()) {
        for search in SEARCHES {
            let chars: Vec<char> = search.chars().collect();
            for len in 1..=chars.len() {
                let shorter: String = chars[..len - 1].iter().collect();
                let longer: String = chars[..len].iter().collect();
                let wide = run(&shorter, category);
                let narrow = run(&longer, category);
                assert!(narrow.len() <= wide.len());
                assert!(narrow.iter().all(|id| wide.contains(id)));
            }
        }
    }
}

#[test]
fn cache_agrees_with_direct_filter() {
    let catalog = Catalog::default();
    let mut cache = QueryCache::new();
    for category in categories(catalog) {
        for search in SEARCHES {
            let query = QueryState::new(*search, CategoryFilter::from_label(category));
            cache.refresh(catalog, &query);
            assert_eq!(
                ids(&cache.results(catalog)),
                ids(&filter_channels(catalog, &query)),
                "{search:?} in {category}"
            );
        }
    }
}

#[test]
fn final_sigma_does_not_break_prefix_narrowing() {
    static GREEK: &[ChannelRecord] = &[ChannelRecord {
        id: 1,
        name: "AΣB",
        url: "https://greek.example",
        category: "Global",
        description: "",
    }];
    let catalog = Catalog::new(GREEK);
    let hits = |search: &str| {
        filter_channels(catalog, &QueryState::new(search, CategoryFilter::All)).len()
    };

    assert_eq!(hits("AΣ"), 1);
    assert_eq!(hits("AΣB"), 1);
    assert_eq!(hits("aσb"), 1);
}

#[test]
fn reserved_all_category_adds_no_second_all() {
    static RESERVED: &[ChannelRecord] = &[
        ChannelRecord {
            id: 1,
            name: "Everything",
            url: "https://all.example",
            category: "All",
            description: "",
        },
        ChannelRecord {
            id: 2,
            name: "Tech",
            url: "https://tech.example",
            category: "Tech",
            description: "",
        },
    ];
    assert_eq!(categories(Catalog::new(RESERVED)), vec!["All", "Tech"]);
    assert!(Catalog::new(RESERVED).check().is_err());
}

use super::*;

fn kw(keyword: &str, volume: i64, difficulty: i64, position: Option<u32>) -> KeywordInput {
    KeywordInput {
        keyword: keyword.to_string(),
        search_volume: volume,
        difficulty,
        position,
    }
}

#[test]
fn test_classifies_each_keyword() {
    let keywords = vec![
        kw("seo tools", 12000, 65, Some(3)),
        kw("obscure term", 50, 80, Some(15)),
        kw("seo audit", 500, 40, None),
        kw("free seo checker", 5000, 20, Some(2)),
    ];
    let out = run_stage3(&keywords).unwrap();
    let tiers = out
        .keywords
        .iter()
        .map(|k| k.breakdown.opportunity)
        .collect::<Vec<_>>();
    assert_eq!(
        tiers,
        vec![
            Opportunity::High,
            Opportunity::Low,
            Opportunity::Medium,
            Opportunity::High,
        ]
    );
    assert_eq!(out.keywords[3].difficulty_level, DifficultyLevel::Easy);
    assert_eq!(out.keywords[3].difficulty_color_tag, "green");
    assert_eq!(out.keywords[0].difficulty_color_tag, "yellow");
    assert_eq!(out.keywords[1].difficulty_color_tag, "red");
    assert_eq!(out.counts[0].count, 2);
    assert_eq!(out.counts[1].count, 1);
    assert_eq!(out.counts[2].count, 1);

    let top = top_opportunities(&out, Opportunity::High);
    assert_eq!(top[0].keyword, "free seo checker");
    assert_eq!(top[1].keyword, "seo tools");
}

#[test]
fn test_invalid_keyword_fails_run() {
    let keywords = vec![kw("ok", 10, 10, None), kw("bad", 10, 150, None)];
    assert!(matches!(
        run_stage3(&keywords),
        Err(ScoreError::InvalidInput(_))
    ));
    let keywords = vec![kw("neg", -5, 10, None)];
    assert!(matches!(
        run_stage3(&keywords),
        Err(ScoreError::InvalidInput(_))
    ));
}

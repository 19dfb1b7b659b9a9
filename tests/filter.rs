use freqmerge::filter::{FilterConfig, has_repeated_run, looks_like_laughter};

#[test]
fn default_thresholds_truth_table() {
    let f = FilterConfig::default(); // min_count=2, min_len=7, max_run=4

    // too short
    assert!(!f.include("ab", 5));
    // count too low
    assert!(!f.include("abcdefg", 1));
    // 4-run of 'a'
    assert!(!f.include("aaaaxyz", 100));
    // laughter
    assert!(!f.include("hahahoo", 100));
    // clean word over both thresholds
    assert!(f.include("excellent", 10));
}

#[test]
fn boundary_values_are_inclusive() {
    let f = FilterConfig {
        min_count: 2,
        min_len: 7,
        max_run: 4,
    };
    // exactly at both thresholds
    assert!(f.include("abcdefg", 2));
    assert!(!f.include("abcdef", 2));
    assert!(!f.include("abcdefg", 1));
}

#[test]
fn zero_thresholds_disable_count_and_length_rules() {
    let f = FilterConfig {
        min_count: 0,
        min_len: 0,
        max_run: 4,
    };
    assert!(f.include("a", 0));
    assert!(f.include("xy", 1));
    // run and laughter rules still apply
    assert!(!f.include("aaaa", 100));
    assert!(!f.include("haha", 100));
}

#[test]
fn repeated_run_detection() {
    // run of exactly 4
    assert!(has_repeated_run("aaaa", 4));
    // run of 3 is below the threshold
    assert!(!has_repeated_run("aaab", 4));
    // run in the middle of a longer word
    assert!(has_repeated_run("xxaaaayy", 4));
    // run at the end
    assert!(has_repeated_run("word!!!!", 4));
    // alternating characters never accumulate a run
    assert!(!has_repeated_run("abababab", 4));
    // shorter than the threshold passes without scanning
    assert!(!has_repeated_run("abc", 4));
    assert!(!has_repeated_run("", 4));
    // threshold 2 catches any doubled character
    assert!(has_repeated_run("aabb", 2));
    assert!(!has_repeated_run("abab", 2));
    // threshold 0 disables the rule
    assert!(!has_repeated_run("aaaaaaaa", 0));
}

#[test]
fn laughter_is_two_literal_substrings_only() {
    assert!(looks_like_laughter("hahahoo"));
    assert!(looks_like_laughter("ahahaha")); // contains "haha"
    assert!(looks_like_laughter("lololol"));
    assert!(looks_like_laughter("xlolox"));

    // the heuristic is deliberately narrow: no case folding, no variants
    assert!(!looks_like_laughter("HAHA"));
    assert!(!looks_like_laughter("hehe"));
    assert!(!looks_like_laughter("lmao"));
    assert!(!looks_like_laughter("hah"));
    assert!(!looks_like_laughter("lol"));
}

#[test]
fn length_rule_counts_bytes_not_chars() {
    let f = FilterConfig {
        min_count: 0,
        min_len: 6,
        max_run: 4,
    };
    // 5 chars but 6 bytes
    assert!(f.include("héllo", 1));
    assert!(!f.include("hello", 1));
}

#[cfg(test)]
mod tests {
    use dna_codec_core::stats::{homopolymer_runs, BaseCounts, HomopolymerRun, NanoporeStats, SequenceStatistics};

// # ✅ 1. Composition

    #[test]
    fn counts_and_gc() {
        let s = SequenceStatistics::new("ATCG");
        assert_eq!(s.length, 4);
        assert_eq!(s.bases, BaseCounts { a: 1, t: 1, c: 1, g: 1 });
        assert_eq!(s.gc_content, 50.0);
    }

    #[test]
    fn case_insensitive_and_foreign_symbols() {
        assert_eq!(SequenceStatistics::new("atcg").bases, SequenceStatistics::new("ATCG").bases);
        // 'N' counts toward length only
        assert_eq!(SequenceStatistics::new("ATCGN").gc_content, 40.0);
        assert_eq!(SequenceStatistics::new("").gc_content, 0.0);
    }

// # ✅ 2. Homopolymer runs

    #[test]
    fn runs_with_positions() {
        assert_eq!(
            homopolymer_runs("AATTTCG"),
            vec![
                HomopolymerRun { base: 'A', length: 2, start: 0 },
                HomopolymerRun { base: 'T', length: 3, start: 2 },
            ]
        );
        assert!(homopolymer_runs("ATCG").is_empty());
    }

// # ✅ 3. Risk assessment

    #[test]
    fn empty_has_no_assessment() {
        assert!(NanoporeStats::assess("").is_none());
    }

    #[test]
    fn balanced_sequence_is_optimized() {
        let s = NanoporeStats::assess("ATCG").unwrap();
        assert_eq!(s.risk_score, 0);
        assert!(s.warnings.is_empty());
        assert!(s.nanopore_optimized);
    }

    #[test]
    fn skewed_sequence_accumulates_risk() {
        let s = NanoporeStats::assess("AAAATTTT").unwrap();
        // +2 for GC, +1 per run
        assert_eq!(s.risk_score, 4);
        assert_eq!(s.warnings.len(), 2);
        assert_eq!(s.homopolymers.len(), 2);
        assert!(!s.nanopore_optimized);
    }

    #[test]
    fn threshold_grows_with_length() {
        // 4 runs + balanced GC: risk 4, threshold 3 + 2 * min(1, len/1000)
        let core = "AATTCCGG";
        let short = NanoporeStats::assess(core).unwrap();
        assert_eq!(short.risk_score, 4);
        assert!(!short.nanopore_optimized);

        let long = format!("{core}{}", "ATCG".repeat(250));
        let long = NanoporeStats::assess(&long).unwrap();
        assert_eq!(long.risk_score, 4);
        assert!(long.nanopore_optimized);
    }

    #[test]
    fn gc_is_rounded_for_reporting() {
        let s = NanoporeStats::assess("GCA").unwrap();
        assert_eq!(s.gc_content, 66.67);
    }
}

//! Selector state-machine tests: flag resolution, conflict rejection, and
//! reference identity of the active parameter set.

#[cfg(test)]
mod tests {
    use gc_chain_params::{params, Network, NetworkSelector, SelectionError};

    #[test]
    fn defaults_to_production() {
        let selector = NetworkSelector::new();
        assert_eq!(selector.network(), Network::Production);
        assert!(std::ptr::eq(selector.active(), params(Network::Production)));
    }

    #[test]
    fn flag_matrix() {
        let cases = [
            ((false, false), Network::Production),
            ((true, false), Network::TestNet),
            ((false, true), Network::RegTest),
        ];
        for ((want_testnet, want_regtest), expected) in cases {
            let mut selector = NetworkSelector::new();
            let selected = selector
                .select_from_flags(want_testnet, want_regtest)
                .unwrap();
            assert_eq!(selected, expected);
            assert_eq!(selector.network(), expected);
        }
    }

    #[test]
    fn conflicting_flags_are_rejected_without_mutation() {
        let mut selector = NetworkSelector::new();
        selector.select(Network::RegTest);
        let before = selector.active();

        assert_eq!(
            selector.select_from_flags(true, true),
            Err(SelectionError::ConflictingNetworks)
        );
        assert!(std::ptr::eq(selector.active(), before));
        assert_eq!(selector.network(), Network::RegTest);
    }

    #[test]
    fn reselection_is_idempotent() {
        let mut selector = NetworkSelector::new();
        selector.select(Network::TestNet);
        let first = selector.active();
        selector.select(Network::TestNet);
        assert!(std::ptr::eq(selector.active(), first));
    }

    #[test]
    fn active_set_is_shared_not_copied() {
        let mut left = NetworkSelector::new();
        let mut right = NetworkSelector::new();
        left.select(Network::TestNet);
        right.select(Network::TestNet);
        assert!(std::ptr::eq(left.active(), right.active()));
    }

    #[test]
    fn switching_exposes_the_right_constants() {
        let mut selector = NetworkSelector::new();
        assert_eq!(selector.active().default_port, 11517);

        selector.select(Network::TestNet);
        assert_eq!(selector.active().default_port, 25713);
        assert_eq!(selector.active().message_start, [0xfe, 0x0c, 0x2f, 0xdc]);

        selector.select(Network::RegTest);
        assert_eq!(selector.active().default_port, 18555);
        assert_eq!(selector.active().rpc_port, 25712);
    }
}

//! Parameter-set integration tests: genesis self-verification across all
//! three networks, the override chain, and seed bootstrapping.

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use gc_chain_params::{params, Base58Role, Network};

    const ONE_WEEK_SECS: u64 = 7 * 24 * 60 * 60;

    fn unix_now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    #[test]
    fn genesis_hashes_match_embedded_constants() {
        let expected = [
            (
                Network::Production,
                "000009b88ae01c8e009d08651c904a1b00f9e24d72538f49c242ba2ee14d859a",
            ),
            (
                Network::TestNet,
                "00003845b6cba6a72017f62f5299ecfbb832a4675082543d2db1e091b37a4b80",
            ),
            (
                Network::RegTest,
                "005526eaf237a937d98a85568d99a317b658ca29d12a8e23033e003828087bba",
            ),
        ];
        for (network, hash) in expected {
            let set = params(network);
            assert_eq!(set.genesis_hash.to_string(), hash, "{network}");
            assert_eq!(set.genesis_hash, set.genesis_block.header.hash(), "{network}");
        }
    }

    #[test]
    fn genesis_merkle_root_is_the_sole_coinbase_txid() {
        for network in [Network::Production, Network::TestNet, Network::RegTest] {
            let block = &params(network).genesis_block;
            assert_eq!(block.transactions.len(), 1);
            assert_eq!(block.header.merkle_root, block.transactions[0].txid());
            assert_eq!(block.header.merkle_root, block.compute_merkle_root());
            assert_eq!(
                block.header.merkle_root.to_string(),
                "f13219df992036c16529305d015d11fe84ee11550d060bfed7a8cc58951040c4"
            );
        }
    }

    #[test]
    fn genesis_coinbase_is_unspendable() {
        for network in [Network::Production, Network::TestNet, Network::RegTest] {
            let coinbase = &params(network).genesis_block.transactions[0];
            assert!(coinbase.inputs[0].previous_output.is_null());
            assert!(coinbase.outputs.iter().all(|output| output.is_empty()));
        }
    }

    #[test]
    fn fixed_seeds_carry_plausible_last_seen() {
        let now = unix_now();
        for network in [Network::Production, Network::TestNet] {
            let seeds = &params(network).fixed_seeds;
            assert!(!seeds.is_empty(), "{network} ships bootstrap peers");
            for seed in seeds {
                // Small slack: the singletons were stamped when first built,
                // which may predate this test by a moment.
                assert!(seed.last_seen + 2 * ONE_WEEK_SECS + 300 >= now);
                assert!(seed.last_seen + ONE_WEEK_SECS <= now + 300);
            }
        }
    }

    #[test]
    fn regtest_is_fully_isolated() {
        let regtest = params(Network::RegTest);
        assert!(regtest.dns_seeds.is_empty());
        assert!(regtest.fixed_seeds.is_empty());
        assert!(!regtest.require_rpc_password);

        // The other two networks keep the credential requirement.
        assert!(params(Network::Production).require_rpc_password);
        assert!(params(Network::TestNet).require_rpc_password);
    }

    #[test]
    fn data_directories_never_collide() {
        let suffixes = [
            params(Network::Production).data_dir_suffix,
            params(Network::TestNet).data_dir_suffix,
            params(Network::RegTest).data_dir_suffix,
        ];
        assert_eq!(suffixes[0], "");
        assert_ne!(suffixes[1], suffixes[2]);
        assert!(!suffixes[1].is_empty() && !suffixes[2].is_empty());
    }

    #[test]
    fn address_prefixes_differ_between_production_and_test() {
        let production = params(Network::Production);
        let testnet = params(Network::TestNet);
        for role in [
            Base58Role::PubkeyAddress,
            Base58Role::ScriptAddress,
            Base58Role::SecretKey,
            Base58Role::ExtPublicKey,
            Base58Role::ExtSecretKey,
        ] {
            assert_ne!(
                production.base58_prefix(role),
                testnet.base58_prefix(role),
                "{role:?}"
            );
        }
        // Regtest encodes addresses exactly like testnet.
        assert_eq!(
            testnet.base58_prefixes,
            params(Network::RegTest).base58_prefixes
        );
    }

    #[test]
    fn header_hash_is_scrypt_of_the_wire_encoding() {
        let header = &params(Network::Production).genesis_block.header;
        let recomputed = shared_crypto::scrypt_hash(&header.serialized());
        assert_eq!(header.hash().as_bytes(), &recomputed);
    }
}

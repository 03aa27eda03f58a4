/*! Integration tests for orderedmap.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - map: Tests for OrderedMap, Value and List (ordering, conversions, serde)
 * - nested: Tests for nested field lookup, copy, removal, set and typed accessors
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("orderedmap=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod map;

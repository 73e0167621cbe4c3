pub mod contract;
pub mod oracle;
pub mod test_fixture;
pub mod token;

use test_fixture::{TestFixture, SCALAR_7};

/// Create a test fixture where the first five users have each funded the contract with 1 token
pub fn create_fixture_with_funders<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create();
    for funder in fixture.users.iter().take(5) {
        fixture.fund_me.fund(funder, &SCALAR_7);
    }
    fixture
}

pub(crate) mod authenticated_claims;
pub(crate) mod compare_api_version;

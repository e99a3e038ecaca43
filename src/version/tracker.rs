//! Release-record source trait and release-version resolution

#[cfg(test)]
use mockall::automock;

use futures::future::try_join_all;
use semver::Version;
use serde::Deserialize;

use crate::config::ProjectConfig;
use crate::fetch::FetchError;
use crate::version::semver::{cmp_release, parse_version};

/// A named version entry from the issue tracker.
///
/// Extra fields in the tracker's payload are ignored; a missing
/// `released` flag counts as unreleased.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReleaseRecord {
    pub name: String,
    #[serde(default)]
    pub released: bool,
}

/// Trait for fetching a project's release records from an issue tracker
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches all release records for a project key
    ///
    /// # Returns
    /// * `Ok(Vec<ReleaseRecord>)` - every version entry the tracker knows,
    ///   released or not
    /// * `Err(FetchError)` - if the fetch fails; the whole cycle aborts
    async fn fetch_releases(&self, project: &str) -> Result<Vec<ReleaseRecord>, FetchError>;
}

/// The highest released version among the records.
///
/// Unreleased records and records whose name is not a valid semantic
/// version never participate. Order-independent.
pub fn max_released(records: &[ReleaseRecord]) -> Option<Version> {
    records
        .iter()
        .filter(|record| record.released)
        .filter_map(|record| parse_version(&record.name))
        .max_by(cmp_release)
}

/// Resolve the released version for every project concurrently.
///
/// All-or-nothing: one failed fetch fails the stage, surfacing the
/// first error in project order. Results line up with `projects`.
pub async fn resolve_versions<S: ReleaseSource>(
    source: &S,
    projects: &[ProjectConfig],
) -> Result<Vec<Option<Version>>, FetchError> {
    try_join_all(projects.iter().map(|project| async move {
        let records = source.fetch_releases(&project.project).await?;
        Ok(max_released(&records))
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use reqwest::StatusCode;
    use rstest::rstest;

    fn record(name: &str, released: bool) -> ReleaseRecord {
        ReleaseRecord {
            name: name.to_string(),
            released,
        }
    }

    fn project(key: &str) -> ProjectConfig {
        ProjectConfig {
            project: key.to_string(),
            servers: vec![ServerConfig {
                url: format!("https://{}.example.com/version", key.to_lowercase()),
            }],
        }
    }

    #[test]
    fn release_record_deserializes_with_missing_released_flag() {
        let record: ReleaseRecord =
            serde_json::from_str(r#"{"name": "1.2.3", "archived": true}"#).unwrap();

        assert_eq!(
            record,
            ReleaseRecord {
                name: "1.2.3".to_string(),
                released: false,
            }
        );
    }

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![("1.0.0", true), ("1.5.0", true), ("1.2.0", true)], Some("1.5.0"))]
    #[case(vec![("2.0.0", false), ("1.5.0", true), ("bogus", true)], Some("1.5.0"))]
    #[case(vec![("2.0.0", false), ("not-a-version", true)], None)]
    #[case(vec![("v3.1.0", true), ("3.0.0", true)], Some("3.1.0"))]
    fn max_released_ignores_unreleased_and_invalid_records(
        #[case] records: Vec<(&str, bool)>,
        #[case] expected: Option<&str>,
    ) {
        let records: Vec<ReleaseRecord> = records
            .into_iter()
            .map(|(name, released)| record(name, released))
            .collect();

        assert_eq!(
            max_released(&records),
            expected.map(|s| parse_version(s).unwrap())
        );
    }

    #[test]
    fn max_released_is_order_independent() {
        let mut records = vec![
            record("1.0.0", true),
            record("2.1.3", true),
            record("0.9.0", true),
            record("2.0.0", false),
        ];
        let expected = max_released(&records);

        // Rotate through every cyclic permutation.
        for _ in 0..records.len() {
            records.rotate_left(1);
            assert_eq!(max_released(&records), expected);
        }
    }

    #[tokio::test]
    async fn resolve_versions_annotates_each_project_in_order() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_releases()
            .withf(|project| project == "CORE")
            .times(1)
            .returning(|_| Ok(vec![record("1.2.0", true), record("1.3.0", true)]));
        source
            .expect_fetch_releases()
            .withf(|project| project == "API")
            .times(1)
            .returning(|_| Ok(vec![record("4.0.0", false)]));

        let projects = vec![project("CORE"), project("API")];
        let resolved = resolve_versions(&source, &projects).await.unwrap();

        assert_eq!(
            resolved,
            vec![Some(parse_version("1.3.0").unwrap()), None]
        );
    }

    #[tokio::test]
    async fn resolve_versions_fails_whole_stage_on_single_error() {
        let mut source = MockReleaseSource::new();
        source
            .expect_fetch_releases()
            .withf(|project| project == "CORE")
            .returning(|_| Ok(vec![record("1.0.0", true)]));
        source
            .expect_fetch_releases()
            .withf(|project| project == "API")
            .returning(|_| {
                Err(FetchError::Status {
                    status: StatusCode::NOT_FOUND,
                    message: "No project could be found with key 'API'.".to_string(),
                })
            });

        let projects = vec![project("CORE"), project("API")];
        let result = resolve_versions(&source, &projects).await;

        assert!(matches!(result, Err(FetchError::Status { .. })));
    }

    #[tokio::test]
    async fn resolve_versions_handles_empty_project_list() {
        let source = MockReleaseSource::new();

        let resolved = resolve_versions(&source, &[]).await.unwrap();

        assert!(resolved.is_empty());
    }
}

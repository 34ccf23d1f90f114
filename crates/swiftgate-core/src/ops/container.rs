//! Container existence operation handlers.
//!
//! Implements the PUT/POST/DELETE/HEAD container state machine: idempotent
//! creation, unconditional creation, delete-if-empty, and existence checks
//! with count headers.

use swiftgate_model::input::{
    CreateContainerInput, DeleteContainerInput, HeadContainerInput, PostContainerInput,
};
use swiftgate_model::output::{
    CreateContainerOutput, DeleteContainerOutput, HeadContainerOutput, PostContainerOutput,
    PLACEHOLDER_HEADER_VALUE,
};
use tracing::debug;

use crate::error::SwiftServiceError;
use crate::provider::SwiftGate;

impl SwiftGate {
    /// Create a container (PUT): a no-op when it already exists.
    pub async fn handle_create_container(
        &self,
        input: CreateContainerInput,
    ) -> Result<CreateContainerOutput, SwiftServiceError> {
        let backend = self.backend(input.auth_token.as_deref());

        if backend.container_exists(&input.container).await? {
            debug!(container = %input.container, "create_container: already exists");
            return Ok(CreateContainerOutput { created: false });
        }

        self.ensure_container_name(&input.container)?;
        backend.create_container(&input.container).await?;
        debug!(container = %input.container, "create_container completed");

        Ok(CreateContainerOutput { created: true })
    }

    /// Create or update a container (POST). Always attempts creation and
    /// does not distinguish existing from new; the metadata headers on the
    /// input are accepted but not persisted in this slice.
    pub async fn handle_post_container(
        &self,
        input: PostContainerInput,
    ) -> Result<PostContainerOutput, SwiftServiceError> {
        let backend = self.backend(input.auth_token.as_deref());

        self.ensure_container_name(&input.container)?;
        backend.create_container(&input.container).await?;
        debug!(container = %input.container, "post_container completed");

        Ok(PostContainerOutput {})
    }

    /// Delete a container iff it holds no objects.
    pub async fn handle_delete_container(
        &self,
        input: DeleteContainerInput,
    ) -> Result<DeleteContainerOutput, SwiftServiceError> {
        let backend = self.backend(input.auth_token.as_deref());

        if !backend.container_exists(&input.container).await? {
            return Err(SwiftServiceError::ContainerNotFound {
                container: input.container,
            });
        }

        if backend.delete_container_if_empty(&input.container).await? {
            debug!(container = %input.container, "delete_container completed");
            Ok(DeleteContainerOutput {})
        } else {
            Err(SwiftServiceError::ContainerNotEmpty {
                container: input.container,
            })
        }
    }

    /// Check container existence and report count headers (HEAD).
    pub async fn handle_head_container(
        &self,
        input: HeadContainerInput,
    ) -> Result<HeadContainerOutput, SwiftServiceError> {
        let backend = self.backend(input.auth_token.as_deref());

        if !backend.container_exists(&input.container).await? {
            return Err(SwiftServiceError::ContainerNotFound {
                container: input.container,
            });
        }

        // Only some backend kinds can count; the header carries the
        // sentinel otherwise.
        let object_count = backend
            .count_blobs(&input.container)
            .await?
            .and_then(|count| i64::try_from(count).ok())
            .unwrap_or(PLACEHOLDER_HEADER_VALUE);

        debug!(
            container = %input.container,
            provider = backend.provider_id(),
            object_count,
            newest = input.newest,
            "head_container completed"
        );

        Ok(HeadContainerOutput {
            object_count,
            bytes_used: 0,
            versions_location: String::new(),
        })
    }

    /// Reject container names longer than the configured maximum.
    ///
    /// Checked at creation time; validation runs before any backend
    /// mutation is attempted.
    fn ensure_container_name(&self, container: &str) -> Result<(), SwiftServiceError> {
        let max = self.config.max_container_name_length;
        if container.len() > max {
            return Err(SwiftServiceError::ContainerNameTooLong {
                length: container.len(),
                max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use swiftgate_model::SwiftErrorCode;

    use super::*;
    use crate::backend::BlobStoreBackend;
    use crate::config::SwiftConfig;

    fn provider() -> SwiftGate {
        SwiftGate::new(SwiftConfig::default())
    }

    fn create_input(container: &str) -> CreateContainerInput {
        CreateContainerInput {
            container: container.to_owned(),
            ..CreateContainerInput::default()
        }
    }

    #[tokio::test]
    async fn test_should_create_then_accept_existing_container() {
        let gate = provider();

        let first = gate
            .handle_create_container(create_input("photos"))
            .await
            .expect("create");
        assert!(first.created);

        let second = gate
            .handle_create_container(create_input("photos"))
            .await
            .expect("re-create");
        assert!(!second.created);

        let backend = gate.backend(None);
        assert!(backend.container_exists("photos").await.expect("exists"));
    }

    #[tokio::test]
    async fn test_should_reject_over_long_container_name_on_put() {
        let gate = SwiftGate::new(SwiftConfig::builder().max_container_name_length(8).build());
        let err = gate
            .handle_create_container(create_input("much-too-long-name"))
            .await
            .unwrap_err();
        assert_eq!(err.into_swift_error().code, SwiftErrorCode::BadRequest);

        let backend = gate.backend(None);
        assert!(
            !backend
                .container_exists("much-too-long-name")
                .await
                .expect("exists")
        );
    }

    #[tokio::test]
    async fn test_should_create_on_post_without_distinguishing() {
        let gate = provider();
        let input = PostContainerInput {
            container: "photos".to_owned(),
            ..PostContainerInput::default()
        };
        gate.handle_post_container(input.clone()).await.expect("post");
        gate.handle_post_container(input).await.expect("post again");

        let backend = gate.backend(None);
        assert!(backend.container_exists("photos").await.expect("exists"));
    }

    #[tokio::test]
    async fn test_should_delete_empty_and_conflict_on_non_empty() {
        let config = SwiftConfig::default();
        let backend = std::sync::Arc::new(crate::memory::InMemoryBackend::new());
        let gate = SwiftGate::with_backend(config, backend.clone());

        gate.handle_create_container(create_input("photos"))
            .await
            .expect("create");
        backend
            .put_blob("photos", "a.jpg", b"data", None)
            .expect("put blob");

        let err = gate
            .handle_delete_container(DeleteContainerInput {
                container: "photos".to_owned(),
                auth_token: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SwiftServiceError::ContainerNotEmpty { .. }));
        assert!(backend.container_exists("photos").await.expect("exists"));

        backend.delete_blob("photos", "a.jpg").expect("delete blob");
        gate.handle_delete_container(DeleteContainerInput {
            container: "photos".to_owned(),
            auth_token: None,
        })
        .await
        .expect("delete");
        assert!(!backend.container_exists("photos").await.expect("exists"));
    }

    #[tokio::test]
    async fn test_should_report_not_found_for_absent_container() {
        let gate = provider();

        let err = gate
            .handle_delete_container(DeleteContainerInput {
                container: "missing".to_owned(),
                auth_token: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SwiftServiceError::ContainerNotFound { .. }));

        let err = gate
            .handle_head_container(HeadContainerInput {
                container: "missing".to_owned(),
                ..HeadContainerInput::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SwiftServiceError::ContainerNotFound { .. }));
    }

    #[tokio::test]
    async fn test_should_count_blobs_on_head() {
        let config = SwiftConfig::default();
        let backend = std::sync::Arc::new(crate::memory::InMemoryBackend::new());
        let gate = SwiftGate::with_backend(config, backend.clone());

        gate.handle_create_container(create_input("photos"))
            .await
            .expect("create");
        backend
            .put_blob("photos", "a.jpg", b"data", None)
            .expect("put blob");
        backend
            .put_blob("photos", "b.jpg", b"data", None)
            .expect("put blob");

        let head = gate
            .handle_head_container(HeadContainerInput {
                container: "photos".to_owned(),
                ..HeadContainerInput::default()
            })
            .await
            .expect("head");
        assert_eq!(head.object_count, 2);
        assert_eq!(head.bytes_used, 0);
        assert_eq!(head.versions_location, "");
    }
}

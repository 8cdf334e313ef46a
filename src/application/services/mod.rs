// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{articles::ArticleService, ports::time::Clock},
    domain::{Deadline, article::ArticleStore, author::AuthorStore},
};

/// Everything the delivery layer needs, built once at startup.
pub struct ApplicationServices {
    pub articles: Arc<ArticleService>,
    clock: Arc<dyn Clock>,
    request_timeout: Duration,
}

impl ApplicationServices {
    pub fn new(
        article_store: Arc<dyn ArticleStore>,
        author_store: Arc<dyn AuthorStore>,
        clock: Arc<dyn Clock>,
        request_timeout: Duration,
    ) -> Self {
        let articles = Arc::new(ArticleService::new(
            Arc::clone(&article_store),
            Arc::clone(&author_store),
            request_timeout,
        ));

        Self {
            articles,
            clock,
            request_timeout,
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    /// Deadline for one inbound request.
    pub fn request_deadline(&self) -> Deadline {
        Deadline::after(self.request_timeout)
    }
}

//! Models for the blog.
//!
//! Fields other than the primary key are private: the only way to
//! change one is through its setter, which runs the field's rule from
//! the [Validated] table first. A rejected value leaves the record
//! untouched.

use std::fmt;

use butane::db::ConnectionMethods;
use butane::prelude::*;
use butane::{model, query, AutoPk};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use crate::validation::{self, FieldRule, ValidationError, Validated};
use crate::Result;

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Stamp creation time on first insert and modification time on every
/// later save.
fn stamp(
    id: &AutoPk<i64>,
    created_at: &mut NaiveDateTime,
    updated_at: &mut Option<NaiveDateTime>,
) {
    if id.is_none() {
        *created_at = now();
    } else {
        *updated_at = Some(now());
    }
}

fn assign<T: Validated>(slot: &mut String, field: &str, value: String) -> validation::Result<()> {
    T::validate_field(field, &value)?;
    *slot = value;
    Ok(())
}

/// A blog author. Names are unique.
#[model]
#[derive(Clone, Debug, Serialize)]
#[table = "authors"]
pub struct Author {
    /// Id of the author.
    pub id: AutoPk<i64>,
    #[unique]
    name: String,
    phone_number: Option<String>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl Validated for Author {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new("name", validation::author_name),
        FieldRule::new("phone_number", validation::phone_number),
    ];
}

impl Author {
    /// Create a new, unsaved Author. Fails if `name` is empty or
    /// already taken by a stored author.
    pub fn new(conn: &impl ConnectionMethods, name: impl Into<String>) -> Result<Self> {
        let mut author = Author {
            id: AutoPk::uninitialized(),
            name: String::new(),
            phone_number: None,
            created_at: now(),
            updated_at: None,
        };
        author.set_name(conn, name)?;
        Ok(author)
    }

    /// The author's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The author's phone number, if one was ever assigned.
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// When the author was first saved.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// When the author was last updated, `None` if never.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    /// Rename the author. Assigning the author's own current name is
    /// allowed; any other stored author's name is not.
    pub fn set_name(
        &mut self,
        conn: &impl ConnectionMethods,
        name: impl Into<String>,
    ) -> Result<()> {
        let name = name.into();
        Self::validate_field("name", &name)?;
        self.ensure_name_available(conn, &name)?;
        self.name = name;
        Ok(())
    }

    /// Assign a phone number. Must be exactly ten characters long.
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) -> validation::Result<()> {
        let phone_number = phone_number.into();
        Self::validate_field("phone_number", &phone_number)?;
        self.phone_number = Some(phone_number);
        Ok(())
    }

    /// Find the stored author with exactly this name.
    pub fn find_by_name(conn: &impl ConnectionMethods, name: &str) -> Result<Option<Author>> {
        let name = name.to_string();
        let found = query!(Author, name == { name }).limit(1).load(conn)?;
        Ok(found.into_iter().next())
    }

    fn ensure_name_available(&self, conn: &impl ConnectionMethods, name: &str) -> Result<()> {
        match Self::find_by_name(conn, name)? {
            Some(existing) if *existing.id != *self.id => {
                log::debug!("name {name:?} already used by author {}", existing.id);
                Err(
                    ValidationError::new("name", "Author with this name already exists.")
                        .into(),
                )
            }
            _ => Ok(()),
        }
    }

    /// Insert or update the author.
    ///
    /// The name is checked against stored authors again, since another
    /// author may have claimed it after this one was built.
    pub fn persist(&mut self, conn: &impl ConnectionMethods) -> Result<()> {
        if let Err(err) = self.ensure_name_available(conn, &self.name) {
            log::warn!("refusing to save {self}: {err}");
            return Err(err);
        }
        let inserting = self.id.is_none();
        stamp(&self.id, &mut self.created_at, &mut self.updated_at);
        self.save(conn)?;
        if inserting {
            log::info!("inserted {self}");
        } else {
            log::info!("updated {self}");
        }
        Ok(())
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

/// A blog post.
#[model]
#[derive(Clone, Debug, Serialize)]
#[table = "posts"]
pub struct Post {
    /// Id of the post.
    pub id: AutoPk<i64>,
    title: String,
    content: String,
    category: String,
    summary: String,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl Validated for Post {
    const RULES: &'static [FieldRule] = &[
        FieldRule::new("title", validation::post_title),
        FieldRule::new("content", validation::post_content),
        FieldRule::new("category", validation::post_category),
        FieldRule::new("summary", validation::post_summary),
    ];
}

impl Post {
    /// Create a new, unsaved Post, validating every field.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
        summary: impl Into<String>,
    ) -> validation::Result<Self> {
        let mut post = Post {
            id: AutoPk::uninitialized(),
            title: String::new(),
            content: String::new(),
            category: String::new(),
            summary: String::new(),
            created_at: now(),
            updated_at: None,
        };
        post.set_title(title)?;
        post.set_content(content)?;
        post.set_category(category)?;
        post.set_summary(summary)?;
        Ok(post)
    }

    /// Title of the post.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body of the post.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Either `Fiction` or `Non-Fiction`.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Short summary, possibly empty.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// When the post was first saved.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// When the post was last updated, `None` if never.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    /// Retitle the post.
    pub fn set_title(&mut self, title: impl Into<String>) -> validation::Result<()> {
        assign::<Self>(&mut self.title, "title", title.into())
    }

    /// Replace the body of the post.
    pub fn set_content(&mut self, content: impl Into<String>) -> validation::Result<()> {
        assign::<Self>(&mut self.content, "content", content.into())
    }

    /// Refile the post.
    pub fn set_category(&mut self, category: impl Into<String>) -> validation::Result<()> {
        assign::<Self>(&mut self.category, "category", category.into())
    }

    /// Replace the summary.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> validation::Result<()> {
        assign::<Self>(&mut self.summary, "summary", summary.into())
    }

    /// Insert or update the post.
    pub fn persist(&mut self, conn: &impl ConnectionMethods) -> Result<()> {
        let inserting = self.id.is_none();
        stamp(&self.id, &mut self.created_at, &mut self.updated_at);
        self.save(conn)?;
        if inserting {
            log::info!("inserted post {}", self.id);
        } else {
            log::info!("updated post {}", self.id);
        }
        Ok(())
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={} content={}, summary={})",
            self.id, self.title, self.content, self.summary
        )
    }
}

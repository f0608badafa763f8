//! Shared fixtures: an in-memory user directory serving scripted pages.

#![allow(dead_code)]

use cognito_export::cognito::{AttributeType, ListUsersResponse, UserDirectory, UserType};
use cognito_export::utils::error::CognitoError;
use std::cell::{Cell, RefCell};

pub struct FakeDirectory {
    pages: Vec<Vec<UserType>>,
    header: Vec<String>,
    pub list_calls: RefCell<Vec<Option<String>>>,
    pub header_calls: Cell<usize>,
    pub fail_page: Option<usize>,
}

impl FakeDirectory {
    pub fn new(pages: Vec<Vec<UserType>>, header: &[&str]) -> Self {
        Self {
            pages,
            header: header.iter().map(|h| h.to_string()).collect(),
            list_calls: RefCell::new(Vec::new()),
            header_calls: Cell::new(0),
            fail_page: None,
        }
    }

    pub fn requests(&self) -> usize {
        self.list_calls.borrow().len()
    }
}

impl UserDirectory for FakeDirectory {
    fn list_users(
        &self,
        _user_pool_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<ListUsersResponse, CognitoError> {
        let mut calls = self.list_calls.borrow_mut();
        let index = calls.len();
        calls.push(pagination_token.map(str::to_string));

        if self.fail_page == Some(index) {
            return Err(CognitoError::Service {
                code: "TooManyRequestsException".to_string(),
                message: "Rate exceeded".to_string(),
            });
        }

        let users = self.pages.get(index).cloned().unwrap_or_default();
        let pagination_token = (index + 1 < self.pages.len()).then(|| format!("page{}", index + 2));

        Ok(ListUsersResponse {
            users,
            pagination_token,
        })
    }

    fn get_csv_header(&self, _user_pool_id: &str) -> Result<Vec<String>, CognitoError> {
        self.header_calls.set(self.header_calls.get() + 1);
        Ok(self.header.clone())
    }
}

pub fn user(username: &str, attributes: &[(&str, &str)]) -> UserType {
    UserType {
        username: username.to_string(),
        attributes: attributes
            .iter()
            .map(|(name, value)| AttributeType::new(*name, *value))
            .collect(),
        ..Default::default()
    }
}

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::enrollment::Enrollment;
use crate::domain::repositories::enrollment_repository::{
    EnrollmentQueryParams, EnrollmentRepository, RepositoryError,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// 内存报名记录仓库实现
///
/// 以`RwLock<HashMap>`保存全部记录。锁只在同步临界区内持有，
/// 不跨越任何await点。读-判-写序列的原子性由服务层的写闸门
/// 保证。
#[derive(Default)]
pub struct InMemoryEnrollmentRepository {
    records: RwLock<HashMap<Uuid, Enrollment>>,
}

impl InMemoryEnrollmentRepository {
    /// 创建空仓库
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryEnrollmentRepository {
    async fn create(&self, enrollment: &Enrollment) -> Result<Enrollment, RepositoryError> {
        let mut records = self.records.write();
        records.insert(enrollment.id, enrollment.clone());
        Ok(enrollment.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Enrollment>, RepositoryError> {
        let records = self.records.read();
        Ok(records.get(&id).cloned())
    }

    async fn update(&self, enrollment: &Enrollment) -> Result<Enrollment, RepositoryError> {
        let mut records = self.records.write();
        match records.get_mut(&enrollment.id) {
            Some(existing) => {
                *existing = enrollment.clone();
                Ok(enrollment.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut records = self.records.write();
        match records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn list(
        &self,
        params: &EnrollmentQueryParams,
    ) -> Result<Vec<Enrollment>, RepositoryError> {
        let records = self.records.read();
        let mut matched: Vec<Enrollment> = records
            .values()
            .filter(|e| params.matches(e))
            .cloned()
            .collect();
        matched.sort_by_key(|e| e.created_at);

        let offset = params.offset.unwrap_or(0) as usize;
        let matched: Vec<Enrollment> = match params.limit {
            Some(limit) => matched
                .into_iter()
                .skip(offset)
                .take(limit as usize)
                .collect(),
            None => matched.into_iter().skip(offset).collect(),
        };
        Ok(matched)
    }

    async fn find_by_seat(&self, seat_number: u32) -> Result<Vec<Enrollment>, RepositoryError> {
        let records = self.records.read();
        Ok(records
            .values()
            .filter(|e| e.seat_number == Some(seat_number))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Enrollment>, RepositoryError> {
        let records = self.records.read();
        let mut all: Vec<Enrollment> = records.values().cloned().collect();
        all.sort_by_key(|e| e.created_at);
        Ok(all)
    }
}

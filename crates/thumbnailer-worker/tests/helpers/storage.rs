use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use thumbnailer_core::ObjectRecord;
use thumbnailer_storage::{Storage, StorageBackend, StorageError, StorageResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Get,
    Put,
    Delete,
}

/// One storage call: operation and key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub op: Op,
    pub key: String,
}

/// In-memory object store that records every call.
///
/// `fail_on(op, key)` makes that operation fail for that key.
#[derive(Default)]
pub struct MockStorage {
    objects: Mutex<HashMap<(String, String), ObjectRecord>>,
    puts: Mutex<HashMap<String, Option<String>>>,
    calls: Mutex<Vec<Call>>,
    failures: Mutex<HashSet<(Op, String)>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, data: Vec<u8>, content_type: Option<&str>) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), key.to_string()),
            ObjectRecord::new(data, content_type.map(str::to_string)),
        );
    }

    pub fn fail_on(&self, op: Op, key: &str) {
        self.failures.lock().unwrap().insert((op, key.to_string()));
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<ObjectRecord> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.calls().into_iter().map(|c| c.op).collect()
    }

    /// Keys written with `put_object`, in order
    pub fn put_keys(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.op == Op::Put)
            .map(|c| c.key)
            .collect()
    }

    /// Content type passed on the last write of `key`
    pub fn put_content_type(&self, key: &str) -> Option<Option<String>> {
        self.puts.lock().unwrap().get(key).cloned()
    }

    fn record(&self, op: Op, key: &str) -> StorageResult<()> {
        self.calls.lock().unwrap().push(Call {
            op,
            key: key.to_string(),
        });
        if self.failures.lock().unwrap().contains(&(op, key.to_string())) {
            let message = format!("injected {:?} failure for {}", op, key);
            return Err(match op {
                Op::Get => StorageError::DownloadFailed(message),
                Op::Put => StorageError::UploadFailed(message),
                Op::Delete => StorageError::DeleteFailed(message),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for MockStorage {
    async fn get_object(&self, bucket: &str, key: &str) -> StorageResult<ObjectRecord> {
        self.record(Op::Get, key)?;
        self.object(bucket, key).ok_or_else(|| StorageError::NotFound {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Vec<u8>,
        content_type: Option<&str>,
    ) -> StorageResult<()> {
        self.record(Op::Put, key)?;
        self.puts
            .lock()
            .unwrap()
            .insert(key.to_string(), content_type.map(str::to_string));
        self.insert(bucket, key, data, content_type);
        Ok(())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> StorageResult<()> {
        self.record(Op::Delete, key)?;
        self.objects
            .lock()
            .unwrap()
            .remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

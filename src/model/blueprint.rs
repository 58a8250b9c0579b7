use serde_json::{Map, Value};

use crate::model::{
    ShapeError, expect_object, index_path, key_path, optional_array, optional_object,
    quoted_key_path,
};

pub const BLUEPRINT_KEY: &str = "blueprint";
pub const BLOCKS_KEY: &str = "blocks";
pub const BLOCK_ID_KEY: &str = "blockId";
pub const INDIVIDUAL_CANDIDATES_KEY: &str = "individualCandidates";
pub const EXERCISES_KEY: &str = "exercises";
pub const NAME_KEY: &str = "name";
pub const SCORE_BREAKDOWN_KEY: &str = "scoreBreakdown";

const ROOT_PATH: &str = "$";

#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    root: &'a Map<String, Value>,
}

impl<'a> DocumentView<'a> {
    pub fn new(value: &'a Value) -> Result<Self, ShapeError> {
        Ok(Self {
            root: expect_object(value, ROOT_PATH)?,
        })
    }

    pub fn blueprint(&self) -> Result<BlueprintView<'a>, ShapeError> {
        let path = key_path(ROOT_PATH, BLUEPRINT_KEY);
        let map = optional_object(self.root, BLUEPRINT_KEY, &path)?;
        Ok(BlueprintView { map, path })
    }
}

#[derive(Debug, Clone)]
pub struct BlueprintView<'a> {
    map: Option<&'a Map<String, Value>>,
    path: String,
}

impl<'a> BlueprintView<'a> {
    pub fn is_present(&self) -> bool {
        self.map.is_some()
    }

    pub fn blocks(
        &self,
    ) -> Result<impl Iterator<Item = Result<BlockView<'a>, ShapeError>> + use<'a>, ShapeError>
    {
        let path = key_path(&self.path, BLOCKS_KEY);
        let blocks: &'a [Value] = match self.map {
            Some(map) => optional_array(map, BLOCKS_KEY, &path)?,
            None => &[],
        };
        Ok(blocks
            .iter()
            .enumerate()
            .map(move |(index, value)| BlockView::new(index, value, &path)))
    }
}

#[derive(Debug, Clone)]
pub struct BlockView<'a> {
    pub index: usize,
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> BlockView<'a> {
    fn new(index: usize, value: &'a Value, parent: &str) -> Result<Self, ShapeError> {
        let path = index_path(parent, index);
        let map = expect_object(value, &path)?;
        Ok(Self { index, map, path })
    }

    pub fn block_id(&self) -> Option<&'a Value> {
        self.map.get(BLOCK_ID_KEY)
    }

    pub fn candidates(
        &self,
    ) -> Result<impl Iterator<Item = Result<CandidateView<'a>, ShapeError>> + use<'a>, ShapeError>
    {
        let path = key_path(&self.path, INDIVIDUAL_CANDIDATES_KEY);
        let candidates = optional_object(self.map, INDIVIDUAL_CANDIDATES_KEY, &path)?;
        Ok(candidates
            .into_iter()
            .flat_map(|map| map.iter())
            .map(move |(client_id, value)| CandidateView::new(client_id, value, &path)))
    }
}

#[derive(Debug, Clone)]
pub struct CandidateView<'a> {
    pub client_id: &'a str,
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> CandidateView<'a> {
    fn new(client_id: &'a str, value: &'a Value, parent: &str) -> Result<Self, ShapeError> {
        let path = quoted_key_path(parent, client_id);
        let map = expect_object(value, &path)?;
        Ok(Self {
            client_id,
            map,
            path,
        })
    }

    pub fn exercises(
        &self,
    ) -> Result<impl Iterator<Item = Result<ExerciseView<'a>, ShapeError>> + use<'a>, ShapeError>
    {
        let path = key_path(&self.path, EXERCISES_KEY);
        let exercises = optional_array(self.map, EXERCISES_KEY, &path)?;
        Ok(exercises
            .iter()
            .enumerate()
            .map(move |(index, value)| ExerciseView::new(index, value, &path)))
    }
}

#[derive(Debug, Clone)]
pub struct ExerciseView<'a> {
    pub index: usize,
    map: &'a Map<String, Value>,
    path: String,
}

impl<'a> ExerciseView<'a> {
    fn new(index: usize, value: &'a Value, parent: &str) -> Result<Self, ShapeError> {
        let path = index_path(parent, index);
        let map = expect_object(value, &path)?;
        Ok(Self { index, map, path })
    }

    pub fn name(&self) -> Option<&'a Value> {
        self.map.get(NAME_KEY)
    }

    // Present even when the stored value is null.
    pub fn score_breakdown(&self) -> Option<&'a Value> {
        self.map.get(SCORE_BREAKDOWN_KEY)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/blueprint.rs"]
mod tests;

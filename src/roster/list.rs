use std::iter;
use std::mem;

use crate::models::{SortKey, SortOrder, Student, Target};

use super::error::ListError;
use super::sort::compare;

/// One slot of the arena. A live node owns its record and the index of its
/// successor; a released slot holds a default record and sits on the free list.
#[derive(Debug, Default)]
struct Node {
    student: Student,
    next: Option<usize>,
}

/// Where a name lookup landed, plus the two nodes trailing it.
struct Located {
    before_prev: Option<usize>,
    prev: Option<usize>,
    idx: usize,
}

/// Ordered, singly linked collection of students.
///
/// Nodes live in a slot vector and link to each other by index, so the list
/// owns every node outright and `tail` is only a shortcut into the same chain.
/// Released slots are recycled through `free` before the vector grows.
///
/// Invariants:
/// - `head` and `tail` are both `None` or both `Some`.
/// - Following `next` from `head` reaches `tail` and stops there.
/// - Every slot is either on the chain exactly once or on the free list.
#[derive(Debug, Default)]
pub struct StudentList {
    slots: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl StudentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of records, found by walking the chain. No counter is cached so
    /// the answer always agrees with what traversal sees.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Borrow the records from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    pub fn first(&self) -> Option<&Student> {
        self.head.map(|idx| &self.slots[idx].student)
    }

    pub fn last(&self) -> Option<&Student> {
        self.tail.map(|idx| &self.slots[idx].student)
    }

    /// Insert a copy of `student` at `target`.
    ///
    /// `BeforeName` on the first record and `AtPosition(1)` both behave like a
    /// head insert. `AtPosition(n)` links after the `(n-1)`-th record, so
    /// `n == count() + 1` appends and anything larger is out of range.
    pub fn insert(&mut self, student: Student, target: &Target) -> Result<(), ListError> {
        match target {
            Target::Head => self.push_front(student),
            Target::Tail => self.push_back(student),
            Target::BeforeName(name) => match self.locate(name)?.prev {
                None => self.push_front(student),
                Some(prev) => self.link_after(prev, student),
            },
            Target::AfterName(name) => {
                let found = self.locate(name)?;
                self.link_after(found.idx, student)
            }
            Target::AtPosition(0) => Err(ListError::InvalidPosition),
            Target::AtPosition(1) => self.push_front(student),
            Target::AtPosition(n) => {
                let prev = self
                    .nth(n - 1)
                    .ok_or(ListError::PositionOutOfRange(*n))?;
                self.link_after(prev, student)
            }
        }
    }

    /// Remove exactly one record and hand it back.
    ///
    /// `BeforeName` removes the record right before the first match, which is
    /// the head when the match sits second. `AfterName` and `AtPosition` splice
    /// out a successor and move `tail` back when that successor was the tail.
    pub fn delete(&mut self, target: &Target) -> Result<Student, ListError> {
        match target {
            Target::Head => self.pop_front(),
            Target::Tail => self.pop_back(),
            Target::BeforeName(name) => {
                let found = self.locate(name)?;
                match (found.before_prev, found.prev) {
                    (_, None) => Err(ListError::NoPredecessor(name.clone())),
                    (None, Some(_)) => self.pop_front(),
                    (Some(before_prev), Some(prev)) => Ok(self.unlink_after(before_prev, prev)),
                }
            }
            Target::AfterName(name) => {
                let found = self.locate(name)?;
                let victim = self.slots[found.idx]
                    .next
                    .ok_or_else(|| ListError::NoSuccessor(name.clone()))?;
                Ok(self.unlink_after(found.idx, victim))
            }
            Target::AtPosition(0) => Err(ListError::InvalidPosition),
            Target::AtPosition(1) => self.pop_front(),
            Target::AtPosition(n) => {
                let prev = self
                    .nth(n - 1)
                    .ok_or(ListError::PositionOutOfRange(*n))?;
                let victim = self.slots[prev]
                    .next
                    .ok_or(ListError::PositionOutOfRange(*n))?;
                Ok(self.unlink_after(prev, victim))
            }
        }
    }

    /// Replace the record stored at `target` in place, returning the old one.
    /// Links are untouched.
    pub fn edit(&mut self, target: &Target, student: Student) -> Result<Student, ListError> {
        let idx = self.resolve(target)?;
        Ok(mem::replace(&mut self.slots[idx].student, student))
    }

    /// Look up the record an `edit` with the same target would replace.
    pub fn get(&self, target: &Target) -> Result<&Student, ListError> {
        let idx = self.resolve(target)?;
        Ok(&self.slots[idx].student)
    }

    /// Stable sort by `key`. Records move between nodes while the chain itself
    /// keeps its shape, so head and tail stay where they are.
    pub fn sort(&mut self, key: SortKey, order: SortOrder) {
        let chain: Vec<usize> = self.chain().collect();
        let mut records: Vec<Student> = chain
            .iter()
            .map(|&idx| mem::take(&mut self.slots[idx].student))
            .collect();
        records.sort_by(|a, b| compare(a, b, key, order));
        for (idx, student) in chain.into_iter().zip(records) {
            self.slots[idx].student = student;
        }
    }

    /// Drop every node. Calling it on an empty list does nothing.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    fn push_front(&mut self, student: Student) -> Result<(), ListError> {
        let idx = self.allocate(student, self.head)?;
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        Ok(())
    }

    fn push_back(&mut self, student: Student) -> Result<(), ListError> {
        let idx = self.allocate(student, None)?;
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        Ok(())
    }

    fn link_after(&mut self, prev: usize, student: Student) -> Result<(), ListError> {
        let idx = self.allocate(student, self.slots[prev].next)?;
        self.slots[prev].next = Some(idx);
        if self.tail == Some(prev) {
            self.tail = Some(idx);
        }
        Ok(())
    }

    fn pop_front(&mut self) -> Result<Student, ListError> {
        let head = self.head.ok_or(ListError::EmptyList)?;
        self.head = self.slots[head].next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(self.release(head))
    }

    fn pop_back(&mut self) -> Result<Student, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyList)?;
        match self.predecessor_of(tail) {
            Some(prev) => {
                self.slots[prev].next = None;
                self.tail = Some(prev);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        Ok(self.release(tail))
    }

    /// Splice `victim` out from behind `prev`.
    fn unlink_after(&mut self, prev: usize, victim: usize) -> Student {
        self.slots[prev].next = self.slots[victim].next;
        if self.tail == Some(victim) {
            self.tail = Some(prev);
        }
        self.release(victim)
    }

    fn resolve(&self, target: &Target) -> Result<usize, ListError> {
        match target {
            Target::Head => self.head.ok_or(ListError::EmptyList),
            Target::Tail => self.tail.ok_or(ListError::EmptyList),
            Target::BeforeName(name) => self
                .locate(name)?
                .prev
                .ok_or_else(|| ListError::NoPredecessor(name.clone())),
            Target::AfterName(name) => {
                let found = self.locate(name)?;
                self.slots[found.idx]
                    .next
                    .ok_or_else(|| ListError::NoSuccessor(name.clone()))
            }
            Target::AtPosition(0) => Err(ListError::InvalidPosition),
            Target::AtPosition(n) => self.nth(*n).ok_or(ListError::PositionOutOfRange(*n)),
        }
    }

    /// First record named `name`, scanning from the head.
    fn locate(&self, name: &str) -> Result<Located, ListError> {
        let mut before_prev = None;
        let mut prev = None;
        for idx in self.chain() {
            if self.slots[idx].student.name == name {
                return Ok(Located {
                    before_prev,
                    prev,
                    idx,
                });
            }
            before_prev = prev;
            prev = Some(idx);
        }
        Err(ListError::NotFound(name.to_string()))
    }

    /// Slot of the `position`-th node, 1-based.
    fn nth(&self, position: usize) -> Option<usize> {
        position
            .checked_sub(1)
            .and_then(|skip| self.chain().nth(skip))
    }

    fn predecessor_of(&self, target: usize) -> Option<usize> {
        self.chain()
            .find(|&idx| self.slots[idx].next == Some(target))
    }

    fn chain(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.head, move |&idx| self.slots[idx].next)
    }

    fn allocate(&mut self, student: Student, next: Option<usize>) -> Result<usize, ListError> {
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = Node { student, next };
            return Ok(idx);
        }
        // The free list keeps capacity for every slot so `release` never allocates.
        let wanted = (self.slots.len() + 1).saturating_sub(self.free.len());
        self.free
            .try_reserve(wanted)
            .map_err(|_| ListError::AllocationFailed)?;
        self.slots
            .try_reserve(1)
            .map_err(|_| ListError::AllocationFailed)?;
        self.slots.push(Node { student, next });
        Ok(self.slots.len() - 1)
    }

    fn release(&mut self, idx: usize) -> Student {
        let node = mem::take(&mut self.slots[idx]);
        self.free.push(idx);
        node.student
    }
}

/// Borrowing iterator over the records, head to tail.
pub struct Iter<'a> {
    list: &'a StudentList,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Student;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.list.slots[idx];
        self.cursor = node.next;
        Some(&node.student)
    }
}

impl<'a> IntoIterator for &'a StudentList {
    type Item = &'a Student;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

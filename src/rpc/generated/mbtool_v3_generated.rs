// automatically generated by the FlatBuffers compiler, do not modify
// @generated

extern crate alloc;


#[allow(unused_imports, dead_code)]
pub mod mbtool {

#[allow(unused_imports, dead_code)]
pub mod daemon {

#[allow(unused_imports, dead_code)]
pub mod v3 {

  use core::mem;
  use core::cmp::Ordering;

  extern crate flatbuffers;
  use self::flatbuffers::{EndianScalar, Follow};

pub enum FileErrorOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileError<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileError<'a> {
  type Inner = FileError<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileError<'a> {
  pub const VT_ERRNO_VALUE: flatbuffers::VOffsetT = 4;
  pub const VT_MSG: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileError { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileErrorArgs<'args>
  ) -> flatbuffers::WIPOffset<FileError<'bldr>> {
    let mut builder = FileErrorBuilder::new(_fbb);
    if let Some(x) = args.msg { builder.add_msg(x); }
    builder.add_errno_value(args.errno_value);
    builder.finish()
  }


  #[inline]
  pub fn errno_value(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileError::VT_ERRNO_VALUE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn msg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(FileError::VT_MSG, None)}
  }
}

impl flatbuffers::Verifiable for FileError<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("errno_value", Self::VT_ERRNO_VALUE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("msg", Self::VT_MSG, false)?
     .finish();
    Ok(())
  }
}
pub struct FileErrorArgs<'a> {
    pub errno_value: i32,
    pub msg: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for FileErrorArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileErrorArgs {
      errno_value: 0,
      msg: None,
    }
  }
}

pub struct FileErrorBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileErrorBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_errno_value(&mut self, errno_value: i32) {
    self.fbb_.push_slot::<i32>(FileError::VT_ERRNO_VALUE, errno_value, 0);
  }
  #[inline]
  pub fn add_msg(&mut self, msg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileError::VT_MSG, msg);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileErrorBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileErrorBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileError<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileError<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileError");
      ds.field("errno_value", &self.errno_value());
      ds.field("msg", &self.msg());
      ds.finish()
  }
}
pub enum PathErrorOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathError<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathError<'a> {
  type Inner = PathError<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathError<'a> {
  pub const VT_ERRNO_VALUE: flatbuffers::VOffsetT = 4;
  pub const VT_MSG: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathError { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathErrorArgs<'args>
  ) -> flatbuffers::WIPOffset<PathError<'bldr>> {
    let mut builder = PathErrorBuilder::new(_fbb);
    if let Some(x) = args.msg { builder.add_msg(x); }
    builder.add_errno_value(args.errno_value);
    builder.finish()
  }


  #[inline]
  pub fn errno_value(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(PathError::VT_ERRNO_VALUE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn msg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathError::VT_MSG, None)}
  }
}

impl flatbuffers::Verifiable for PathError<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("errno_value", Self::VT_ERRNO_VALUE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("msg", Self::VT_MSG, false)?
     .finish();
    Ok(())
  }
}
pub struct PathErrorArgs<'a> {
    pub errno_value: i32,
    pub msg: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for PathErrorArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathErrorArgs {
      errno_value: 0,
      msg: None,
    }
  }
}

pub struct PathErrorBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathErrorBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_errno_value(&mut self, errno_value: i32) {
    self.fbb_.push_slot::<i32>(PathError::VT_ERRNO_VALUE, errno_value, 0);
  }
  #[inline]
  pub fn add_msg(&mut self, msg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathError::VT_MSG, msg);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathErrorBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathErrorBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathError<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathError<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathError");
      ds.field("errno_value", &self.errno_value());
      ds.field("msg", &self.msg());
      ds.finish()
  }
}
pub enum MbErrorOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbError<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbError<'a> {
  type Inner = MbError<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbError<'a> {
  pub const VT_ERRNO_VALUE: flatbuffers::VOffsetT = 4;
  pub const VT_MSG: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbError { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbErrorArgs<'args>
  ) -> flatbuffers::WIPOffset<MbError<'bldr>> {
    let mut builder = MbErrorBuilder::new(_fbb);
    if let Some(x) = args.msg { builder.add_msg(x); }
    builder.add_errno_value(args.errno_value);
    builder.finish()
  }


  #[inline]
  pub fn errno_value(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(MbError::VT_ERRNO_VALUE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn msg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbError::VT_MSG, None)}
  }
}

impl flatbuffers::Verifiable for MbError<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("errno_value", Self::VT_ERRNO_VALUE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("msg", Self::VT_MSG, false)?
     .finish();
    Ok(())
  }
}
pub struct MbErrorArgs<'a> {
    pub errno_value: i32,
    pub msg: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for MbErrorArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbErrorArgs {
      errno_value: 0,
      msg: None,
    }
  }
}

pub struct MbErrorBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbErrorBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_errno_value(&mut self, errno_value: i32) {
    self.fbb_.push_slot::<i32>(MbError::VT_ERRNO_VALUE, errno_value, 0);
  }
  #[inline]
  pub fn add_msg(&mut self, msg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbError::VT_MSG, msg);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbErrorBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbErrorBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbError<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbError<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbError");
      ds.field("errno_value", &self.errno_value());
      ds.field("msg", &self.msg());
      ds.finish()
  }
}
pub enum SignedExecErrorOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct SignedExecError<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SignedExecError<'a> {
  type Inner = SignedExecError<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> SignedExecError<'a> {
  pub const VT_ERRNO_VALUE: flatbuffers::VOffsetT = 4;
  pub const VT_MSG: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    SignedExecError { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args SignedExecErrorArgs<'args>
  ) -> flatbuffers::WIPOffset<SignedExecError<'bldr>> {
    let mut builder = SignedExecErrorBuilder::new(_fbb);
    if let Some(x) = args.msg { builder.add_msg(x); }
    builder.add_errno_value(args.errno_value);
    builder.finish()
  }


  #[inline]
  pub fn errno_value(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(SignedExecError::VT_ERRNO_VALUE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn msg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SignedExecError::VT_MSG, None)}
  }
}

impl flatbuffers::Verifiable for SignedExecError<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("errno_value", Self::VT_ERRNO_VALUE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("msg", Self::VT_MSG, false)?
     .finish();
    Ok(())
  }
}
pub struct SignedExecErrorArgs<'a> {
    pub errno_value: i32,
    pub msg: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for SignedExecErrorArgs<'a> {
  #[inline]
  fn default() -> Self {
    SignedExecErrorArgs {
      errno_value: 0,
      msg: None,
    }
  }
}

pub struct SignedExecErrorBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> SignedExecErrorBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_errno_value(&mut self, errno_value: i32) {
    self.fbb_.push_slot::<i32>(SignedExecError::VT_ERRNO_VALUE, errno_value, 0);
  }
  #[inline]
  pub fn add_msg(&mut self, msg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecError::VT_MSG, msg);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> SignedExecErrorBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    SignedExecErrorBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<SignedExecError<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for SignedExecError<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("SignedExecError");
      ds.field("errno_value", &self.errno_value());
      ds.field("msg", &self.msg());
      ds.finish()
  }
}
pub enum SystemErrorOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct SystemError<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SystemError<'a> {
  type Inner = SystemError<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> SystemError<'a> {
  pub const VT_ERRNO_VALUE: flatbuffers::VOffsetT = 4;
  pub const VT_MSG: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    SystemError { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args SystemErrorArgs<'args>
  ) -> flatbuffers::WIPOffset<SystemError<'bldr>> {
    let mut builder = SystemErrorBuilder::new(_fbb);
    if let Some(x) = args.msg { builder.add_msg(x); }
    builder.add_errno_value(args.errno_value);
    builder.finish()
  }


  #[inline]
  pub fn errno_value(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(SystemError::VT_ERRNO_VALUE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn msg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SystemError::VT_MSG, None)}
  }
}

impl flatbuffers::Verifiable for SystemError<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("errno_value", Self::VT_ERRNO_VALUE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("msg", Self::VT_MSG, false)?
     .finish();
    Ok(())
  }
}
pub struct SystemErrorArgs<'a> {
    pub errno_value: i32,
    pub msg: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for SystemErrorArgs<'a> {
  #[inline]
  fn default() -> Self {
    SystemErrorArgs {
      errno_value: 0,
      msg: None,
    }
  }
}

pub struct SystemErrorBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> SystemErrorBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_errno_value(&mut self, errno_value: i32) {
    self.fbb_.push_slot::<i32>(SystemError::VT_ERRNO_VALUE, errno_value, 0);
  }
  #[inline]
  pub fn add_msg(&mut self, msg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SystemError::VT_MSG, msg);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> SystemErrorBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    SystemErrorBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<SystemError<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for SystemError<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("SystemError");
      ds.field("errno_value", &self.errno_value());
      ds.field("msg", &self.msg());
      ds.finish()
  }
}
pub enum StructStatOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct StructStat<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for StructStat<'a> {
  type Inner = StructStat<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> StructStat<'a> {
  pub const VT_ST_DEV: flatbuffers::VOffsetT = 4;
  pub const VT_ST_INO: flatbuffers::VOffsetT = 6;
  pub const VT_ST_MODE: flatbuffers::VOffsetT = 8;
  pub const VT_ST_NLINK: flatbuffers::VOffsetT = 10;
  pub const VT_ST_UID: flatbuffers::VOffsetT = 12;
  pub const VT_ST_GID: flatbuffers::VOffsetT = 14;
  pub const VT_ST_RDEV: flatbuffers::VOffsetT = 16;
  pub const VT_ST_SIZE: flatbuffers::VOffsetT = 18;
  pub const VT_ST_BLKSIZE: flatbuffers::VOffsetT = 20;
  pub const VT_ST_BLOCKS: flatbuffers::VOffsetT = 22;
  pub const VT_ST_ATIME: flatbuffers::VOffsetT = 24;
  pub const VT_ST_MTIME: flatbuffers::VOffsetT = 26;
  pub const VT_ST_CTIME: flatbuffers::VOffsetT = 28;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    StructStat { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args StructStatArgs
  ) -> flatbuffers::WIPOffset<StructStat<'bldr>> {
    let mut builder = StructStatBuilder::new(_fbb);
    builder.add_st_ctime(args.st_ctime);
    builder.add_st_mtime(args.st_mtime);
    builder.add_st_atime(args.st_atime);
    builder.add_st_blocks(args.st_blocks);
    builder.add_st_blksize(args.st_blksize);
    builder.add_st_size(args.st_size);
    builder.add_st_rdev(args.st_rdev);
    builder.add_st_nlink(args.st_nlink);
    builder.add_st_ino(args.st_ino);
    builder.add_st_dev(args.st_dev);
    builder.add_st_gid(args.st_gid);
    builder.add_st_uid(args.st_uid);
    builder.add_st_mode(args.st_mode);
    builder.finish()
  }


  #[inline]
  pub fn st_dev(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(StructStat::VT_ST_DEV, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_ino(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(StructStat::VT_ST_INO, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_mode(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(StructStat::VT_ST_MODE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_nlink(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(StructStat::VT_ST_NLINK, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_uid(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(StructStat::VT_ST_UID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_gid(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(StructStat::VT_ST_GID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_rdev(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(StructStat::VT_ST_RDEV, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_size(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(StructStat::VT_ST_SIZE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_blksize(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(StructStat::VT_ST_BLKSIZE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_blocks(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(StructStat::VT_ST_BLOCKS, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_atime(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(StructStat::VT_ST_ATIME, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_mtime(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(StructStat::VT_ST_MTIME, Some(0)).unwrap()}
  }
  #[inline]
  pub fn st_ctime(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(StructStat::VT_ST_CTIME, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for StructStat<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<u64>("st_dev", Self::VT_ST_DEV, false)?
     .visit_field::<u64>("st_ino", Self::VT_ST_INO, false)?
     .visit_field::<u32>("st_mode", Self::VT_ST_MODE, false)?
     .visit_field::<u64>("st_nlink", Self::VT_ST_NLINK, false)?
     .visit_field::<u32>("st_uid", Self::VT_ST_UID, false)?
     .visit_field::<u32>("st_gid", Self::VT_ST_GID, false)?
     .visit_field::<u64>("st_rdev", Self::VT_ST_RDEV, false)?
     .visit_field::<i64>("st_size", Self::VT_ST_SIZE, false)?
     .visit_field::<i64>("st_blksize", Self::VT_ST_BLKSIZE, false)?
     .visit_field::<i64>("st_blocks", Self::VT_ST_BLOCKS, false)?
     .visit_field::<i64>("st_atime", Self::VT_ST_ATIME, false)?
     .visit_field::<i64>("st_mtime", Self::VT_ST_MTIME, false)?
     .visit_field::<i64>("st_ctime", Self::VT_ST_CTIME, false)?
     .finish();
    Ok(())
  }
}
pub struct StructStatArgs {
    pub st_dev: u64,
    pub st_ino: u64,
    pub st_mode: u32,
    pub st_nlink: u64,
    pub st_uid: u32,
    pub st_gid: u32,
    pub st_rdev: u64,
    pub st_size: i64,
    pub st_blksize: i64,
    pub st_blocks: i64,
    pub st_atime: i64,
    pub st_mtime: i64,
    pub st_ctime: i64,
}
impl<'a> Default for StructStatArgs {
  #[inline]
  fn default() -> Self {
    StructStatArgs {
      st_dev: 0,
      st_ino: 0,
      st_mode: 0,
      st_nlink: 0,
      st_uid: 0,
      st_gid: 0,
      st_rdev: 0,
      st_size: 0,
      st_blksize: 0,
      st_blocks: 0,
      st_atime: 0,
      st_mtime: 0,
      st_ctime: 0,
    }
  }
}

pub struct StructStatBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> StructStatBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_st_dev(&mut self, st_dev: u64) {
    self.fbb_.push_slot::<u64>(StructStat::VT_ST_DEV, st_dev, 0);
  }
  #[inline]
  pub fn add_st_ino(&mut self, st_ino: u64) {
    self.fbb_.push_slot::<u64>(StructStat::VT_ST_INO, st_ino, 0);
  }
  #[inline]
  pub fn add_st_mode(&mut self, st_mode: u32) {
    self.fbb_.push_slot::<u32>(StructStat::VT_ST_MODE, st_mode, 0);
  }
  #[inline]
  pub fn add_st_nlink(&mut self, st_nlink: u64) {
    self.fbb_.push_slot::<u64>(StructStat::VT_ST_NLINK, st_nlink, 0);
  }
  #[inline]
  pub fn add_st_uid(&mut self, st_uid: u32) {
    self.fbb_.push_slot::<u32>(StructStat::VT_ST_UID, st_uid, 0);
  }
  #[inline]
  pub fn add_st_gid(&mut self, st_gid: u32) {
    self.fbb_.push_slot::<u32>(StructStat::VT_ST_GID, st_gid, 0);
  }
  #[inline]
  pub fn add_st_rdev(&mut self, st_rdev: u64) {
    self.fbb_.push_slot::<u64>(StructStat::VT_ST_RDEV, st_rdev, 0);
  }
  #[inline]
  pub fn add_st_size(&mut self, st_size: i64) {
    self.fbb_.push_slot::<i64>(StructStat::VT_ST_SIZE, st_size, 0);
  }
  #[inline]
  pub fn add_st_blksize(&mut self, st_blksize: i64) {
    self.fbb_.push_slot::<i64>(StructStat::VT_ST_BLKSIZE, st_blksize, 0);
  }
  #[inline]
  pub fn add_st_blocks(&mut self, st_blocks: i64) {
    self.fbb_.push_slot::<i64>(StructStat::VT_ST_BLOCKS, st_blocks, 0);
  }
  #[inline]
  pub fn add_st_atime(&mut self, st_atime: i64) {
    self.fbb_.push_slot::<i64>(StructStat::VT_ST_ATIME, st_atime, 0);
  }
  #[inline]
  pub fn add_st_mtime(&mut self, st_mtime: i64) {
    self.fbb_.push_slot::<i64>(StructStat::VT_ST_MTIME, st_mtime, 0);
  }
  #[inline]
  pub fn add_st_ctime(&mut self, st_ctime: i64) {
    self.fbb_.push_slot::<i64>(StructStat::VT_ST_CTIME, st_ctime, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> StructStatBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    StructStatBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<StructStat<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for StructStat<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("StructStat");
      ds.field("st_dev", &self.st_dev());
      ds.field("st_ino", &self.st_ino());
      ds.field("st_mode", &self.st_mode());
      ds.field("st_nlink", &self.st_nlink());
      ds.field("st_uid", &self.st_uid());
      ds.field("st_gid", &self.st_gid());
      ds.field("st_rdev", &self.st_rdev());
      ds.field("st_size", &self.st_size());
      ds.field("st_blksize", &self.st_blksize());
      ds.field("st_blocks", &self.st_blocks());
      ds.field("st_atime", &self.st_atime());
      ds.field("st_mtime", &self.st_mtime());
      ds.field("st_ctime", &self.st_ctime());
      ds.finish()
  }
}
pub enum MbRomOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbRom<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbRom<'a> {
  type Inner = MbRom<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbRom<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_SYSTEM_PATH: flatbuffers::VOffsetT = 6;
  pub const VT_CACHE_PATH: flatbuffers::VOffsetT = 8;
  pub const VT_DATA_PATH: flatbuffers::VOffsetT = 10;
  pub const VT_VERSION: flatbuffers::VOffsetT = 12;
  pub const VT_BUILD: flatbuffers::VOffsetT = 14;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbRom { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbRomArgs<'args>
  ) -> flatbuffers::WIPOffset<MbRom<'bldr>> {
    let mut builder = MbRomBuilder::new(_fbb);
    if let Some(x) = args.build { builder.add_build(x); }
    if let Some(x) = args.version { builder.add_version(x); }
    if let Some(x) = args.data_path { builder.add_data_path(x); }
    if let Some(x) = args.cache_path { builder.add_cache_path(x); }
    if let Some(x) = args.system_path { builder.add_system_path(x); }
    if let Some(x) = args.id { builder.add_id(x); }
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbRom::VT_ID, None)}
  }
  #[inline]
  pub fn system_path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbRom::VT_SYSTEM_PATH, None)}
  }
  #[inline]
  pub fn cache_path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbRom::VT_CACHE_PATH, None)}
  }
  #[inline]
  pub fn data_path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbRom::VT_DATA_PATH, None)}
  }
  #[inline]
  pub fn version(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbRom::VT_VERSION, None)}
  }
  #[inline]
  pub fn build(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbRom::VT_BUILD, None)}
  }
}

impl flatbuffers::Verifiable for MbRom<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("id", Self::VT_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("system_path", Self::VT_SYSTEM_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("cache_path", Self::VT_CACHE_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("data_path", Self::VT_DATA_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("version", Self::VT_VERSION, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("build", Self::VT_BUILD, false)?
     .finish();
    Ok(())
  }
}
pub struct MbRomArgs<'a> {
    pub id: Option<flatbuffers::WIPOffset<&'a str>>,
    pub system_path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub cache_path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub data_path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub version: Option<flatbuffers::WIPOffset<&'a str>>,
    pub build: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for MbRomArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbRomArgs {
      id: None,
      system_path: None,
      cache_path: None,
      data_path: None,
      version: None,
      build: None,
    }
  }
}

pub struct MbRomBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbRomBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbRom::VT_ID, id);
  }
  #[inline]
  pub fn add_system_path(&mut self, system_path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbRom::VT_SYSTEM_PATH, system_path);
  }
  #[inline]
  pub fn add_cache_path(&mut self, cache_path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbRom::VT_CACHE_PATH, cache_path);
  }
  #[inline]
  pub fn add_data_path(&mut self, data_path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbRom::VT_DATA_PATH, data_path);
  }
  #[inline]
  pub fn add_version(&mut self, version: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbRom::VT_VERSION, version);
  }
  #[inline]
  pub fn add_build(&mut self, build: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbRom::VT_BUILD, build);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbRomBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbRomBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbRom<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbRom<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbRom");
      ds.field("id", &self.id());
      ds.field("system_path", &self.system_path());
      ds.field("cache_path", &self.cache_path());
      ds.field("data_path", &self.data_path());
      ds.field("version", &self.version());
      ds.field("build", &self.build());
      ds.finish()
  }
}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_FILE_OPEN_FLAG: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_FILE_OPEN_FLAG: i16 = 6;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_FILE_OPEN_FLAG: [FileOpenFlag; 7] = [
  FileOpenFlag::APPEND,
  FileOpenFlag::CREAT,
  FileOpenFlag::EXCL,
  FileOpenFlag::RDONLY,
  FileOpenFlag::RDWR,
  FileOpenFlag::TRUNC,
  FileOpenFlag::WRONLY,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FileOpenFlag(pub i16);
#[allow(non_upper_case_globals)]
impl FileOpenFlag {
  pub const APPEND: Self = Self(0);
  pub const CREAT: Self = Self(1);
  pub const EXCL: Self = Self(2);
  pub const RDONLY: Self = Self(3);
  pub const RDWR: Self = Self(4);
  pub const TRUNC: Self = Self(5);
  pub const WRONLY: Self = Self(6);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 6;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::APPEND,
    Self::CREAT,
    Self::EXCL,
    Self::RDONLY,
    Self::RDWR,
    Self::TRUNC,
    Self::WRONLY,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::APPEND => Some("APPEND"),
      Self::CREAT => Some("CREAT"),
      Self::EXCL => Some("EXCL"),
      Self::RDONLY => Some("RDONLY"),
      Self::RDWR => Some("RDWR"),
      Self::TRUNC => Some("TRUNC"),
      Self::WRONLY => Some("WRONLY"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for FileOpenFlag {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for FileOpenFlag {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for FileOpenFlag {
    type Output = FileOpenFlag;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for FileOpenFlag {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for FileOpenFlag {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for FileOpenFlag {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_FILE_SEEK_WHENCE: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_FILE_SEEK_WHENCE: i16 = 2;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_FILE_SEEK_WHENCE: [FileSeekWhence; 3] = [
  FileSeekWhence::SEEK_SET,
  FileSeekWhence::SEEK_CUR,
  FileSeekWhence::SEEK_END,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FileSeekWhence(pub i16);
#[allow(non_upper_case_globals)]
impl FileSeekWhence {
  pub const SEEK_SET: Self = Self(0);
  pub const SEEK_CUR: Self = Self(1);
  pub const SEEK_END: Self = Self(2);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 2;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::SEEK_SET,
    Self::SEEK_CUR,
    Self::SEEK_END,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::SEEK_SET => Some("SEEK_SET"),
      Self::SEEK_CUR => Some("SEEK_CUR"),
      Self::SEEK_END => Some("SEEK_END"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for FileSeekWhence {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for FileSeekWhence {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for FileSeekWhence {
    type Output = FileSeekWhence;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for FileSeekWhence {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for FileSeekWhence {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for FileSeekWhence {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_PATH_DELETE_FLAG: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_PATH_DELETE_FLAG: i16 = 3;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_PATH_DELETE_FLAG: [PathDeleteFlag; 4] = [
  PathDeleteFlag::REMOVE,
  PathDeleteFlag::UNLINK,
  PathDeleteFlag::RMDIR,
  PathDeleteFlag::RECURSIVE,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct PathDeleteFlag(pub i16);
#[allow(non_upper_case_globals)]
impl PathDeleteFlag {
  pub const REMOVE: Self = Self(0);
  pub const UNLINK: Self = Self(1);
  pub const RMDIR: Self = Self(2);
  pub const RECURSIVE: Self = Self(3);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 3;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::REMOVE,
    Self::UNLINK,
    Self::RMDIR,
    Self::RECURSIVE,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::REMOVE => Some("REMOVE"),
      Self::UNLINK => Some("UNLINK"),
      Self::RMDIR => Some("RMDIR"),
      Self::RECURSIVE => Some("RECURSIVE"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for PathDeleteFlag {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for PathDeleteFlag {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for PathDeleteFlag {
    type Output = PathDeleteFlag;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for PathDeleteFlag {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for PathDeleteFlag {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for PathDeleteFlag {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_MB_WIPE_TARGET: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_MB_WIPE_TARGET: i16 = 4;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_MB_WIPE_TARGET: [MbWipeTarget; 5] = [
  MbWipeTarget::SYSTEM,
  MbWipeTarget::CACHE,
  MbWipeTarget::DATA,
  MbWipeTarget::DALVIK_CACHE,
  MbWipeTarget::MULTIBOOT,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct MbWipeTarget(pub i16);
#[allow(non_upper_case_globals)]
impl MbWipeTarget {
  pub const SYSTEM: Self = Self(0);
  pub const CACHE: Self = Self(1);
  pub const DATA: Self = Self(2);
  pub const DALVIK_CACHE: Self = Self(3);
  pub const MULTIBOOT: Self = Self(4);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 4;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::SYSTEM,
    Self::CACHE,
    Self::DATA,
    Self::DALVIK_CACHE,
    Self::MULTIBOOT,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::SYSTEM => Some("SYSTEM"),
      Self::CACHE => Some("CACHE"),
      Self::DATA => Some("DATA"),
      Self::DALVIK_CACHE => Some("DALVIK_CACHE"),
      Self::MULTIBOOT => Some("MULTIBOOT"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for MbWipeTarget {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for MbWipeTarget {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for MbWipeTarget {
    type Output = MbWipeTarget;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for MbWipeTarget {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for MbWipeTarget {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for MbWipeTarget {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_MB_SWITCH_ROM_RESULT: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_MB_SWITCH_ROM_RESULT: i16 = 3;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_MB_SWITCH_ROM_RESULT: [MbSwitchRomResult; 4] = [
  MbSwitchRomResult::SUCCEEDED,
  MbSwitchRomResult::FAILED,
  MbSwitchRomResult::CHECKSUM_INVALID,
  MbSwitchRomResult::CHECKSUM_NOT_FOUND,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct MbSwitchRomResult(pub i16);
#[allow(non_upper_case_globals)]
impl MbSwitchRomResult {
  pub const SUCCEEDED: Self = Self(0);
  pub const FAILED: Self = Self(1);
  pub const CHECKSUM_INVALID: Self = Self(2);
  pub const CHECKSUM_NOT_FOUND: Self = Self(3);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 3;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::SUCCEEDED,
    Self::FAILED,
    Self::CHECKSUM_INVALID,
    Self::CHECKSUM_NOT_FOUND,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::SUCCEEDED => Some("SUCCEEDED"),
      Self::FAILED => Some("FAILED"),
      Self::CHECKSUM_INVALID => Some("CHECKSUM_INVALID"),
      Self::CHECKSUM_NOT_FOUND => Some("CHECKSUM_NOT_FOUND"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for MbSwitchRomResult {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for MbSwitchRomResult {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for MbSwitchRomResult {
    type Output = MbSwitchRomResult;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for MbSwitchRomResult {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for MbSwitchRomResult {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for MbSwitchRomResult {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_SIGNED_EXEC_RESULT: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_SIGNED_EXEC_RESULT: i16 = 3;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_SIGNED_EXEC_RESULT: [SignedExecResult; 4] = [
  SignedExecResult::PROCESS_EXITED,
  SignedExecResult::PROCESS_KILLED_BY_SIGNAL,
  SignedExecResult::INVALID_SIGNATURE,
  SignedExecResult::OTHER_ERROR,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct SignedExecResult(pub i16);
#[allow(non_upper_case_globals)]
impl SignedExecResult {
  pub const PROCESS_EXITED: Self = Self(0);
  pub const PROCESS_KILLED_BY_SIGNAL: Self = Self(1);
  pub const INVALID_SIGNATURE: Self = Self(2);
  pub const OTHER_ERROR: Self = Self(3);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 3;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::PROCESS_EXITED,
    Self::PROCESS_KILLED_BY_SIGNAL,
    Self::INVALID_SIGNATURE,
    Self::OTHER_ERROR,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::PROCESS_EXITED => Some("PROCESS_EXITED"),
      Self::PROCESS_KILLED_BY_SIGNAL => Some("PROCESS_KILLED_BY_SIGNAL"),
      Self::INVALID_SIGNATURE => Some("INVALID_SIGNATURE"),
      Self::OTHER_ERROR => Some("OTHER_ERROR"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for SignedExecResult {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for SignedExecResult {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for SignedExecResult {
    type Output = SignedExecResult;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for SignedExecResult {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for SignedExecResult {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for SignedExecResult {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_REBOOT_TYPE: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_REBOOT_TYPE: i16 = 2;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_REBOOT_TYPE: [RebootType; 3] = [
  RebootType::FRAMEWORK,
  RebootType::INIT,
  RebootType::DIRECT,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct RebootType(pub i16);
#[allow(non_upper_case_globals)]
impl RebootType {
  pub const FRAMEWORK: Self = Self(0);
  pub const INIT: Self = Self(1);
  pub const DIRECT: Self = Self(2);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 2;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::FRAMEWORK,
    Self::INIT,
    Self::DIRECT,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::FRAMEWORK => Some("FRAMEWORK"),
      Self::INIT => Some("INIT"),
      Self::DIRECT => Some("DIRECT"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for RebootType {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for RebootType {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for RebootType {
    type Output = RebootType;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for RebootType {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for RebootType {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for RebootType {}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_SHUTDOWN_TYPE: i16 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_SHUTDOWN_TYPE: i16 = 1;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_SHUTDOWN_TYPE: [ShutdownType; 2] = [
  ShutdownType::INIT,
  ShutdownType::DIRECT,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ShutdownType(pub i16);
#[allow(non_upper_case_globals)]
impl ShutdownType {
  pub const INIT: Self = Self(0);
  pub const DIRECT: Self = Self(1);

  pub const ENUM_MIN: i16 = 0;
  pub const ENUM_MAX: i16 = 1;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::INIT,
    Self::DIRECT,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::INIT => Some("INIT"),
      Self::DIRECT => Some("DIRECT"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for ShutdownType {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for ShutdownType {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<i16>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for ShutdownType {
    type Output = ShutdownType;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<i16>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for ShutdownType {
  type Scalar = i16;
  #[inline]
  fn to_little_endian(self) -> i16 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: i16) -> Self {
    let b = i16::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for ShutdownType {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    i16::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for ShutdownType {}
pub enum FileChmodRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileChmodRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileChmodRequest<'a> {
  type Inner = FileChmodRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileChmodRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_MODE: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileChmodRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileChmodRequestArgs
  ) -> flatbuffers::WIPOffset<FileChmodRequest<'bldr>> {
    let mut builder = FileChmodRequestBuilder::new(_fbb);
    builder.add_mode(args.mode);
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileChmodRequest::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn mode(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(FileChmodRequest::VT_MODE, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileChmodRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .visit_field::<u32>("mode", Self::VT_MODE, false)?
     .finish();
    Ok(())
  }
}
pub struct FileChmodRequestArgs {
    pub id: i32,
    pub mode: u32,
}
impl<'a> Default for FileChmodRequestArgs {
  #[inline]
  fn default() -> Self {
    FileChmodRequestArgs {
      id: 0,
      mode: 0,
    }
  }
}

pub struct FileChmodRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileChmodRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileChmodRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_mode(&mut self, mode: u32) {
    self.fbb_.push_slot::<u32>(FileChmodRequest::VT_MODE, mode, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileChmodRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileChmodRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileChmodRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileChmodRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileChmodRequest");
      ds.field("id", &self.id());
      ds.field("mode", &self.mode());
      ds.finish()
  }
}
pub enum FileCloseRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileCloseRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileCloseRequest<'a> {
  type Inner = FileCloseRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileCloseRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileCloseRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileCloseRequestArgs
  ) -> flatbuffers::WIPOffset<FileCloseRequest<'bldr>> {
    let mut builder = FileCloseRequestBuilder::new(_fbb);
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileCloseRequest::VT_ID, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileCloseRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .finish();
    Ok(())
  }
}
pub struct FileCloseRequestArgs {
    pub id: i32,
}
impl<'a> Default for FileCloseRequestArgs {
  #[inline]
  fn default() -> Self {
    FileCloseRequestArgs {
      id: 0,
    }
  }
}

pub struct FileCloseRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileCloseRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileCloseRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileCloseRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileCloseRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileCloseRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileCloseRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileCloseRequest");
      ds.field("id", &self.id());
      ds.finish()
  }
}
pub enum FileOpenRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileOpenRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileOpenRequest<'a> {
  type Inner = FileOpenRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileOpenRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_FLAGS: flatbuffers::VOffsetT = 6;
  pub const VT_PERMS: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileOpenRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileOpenRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<FileOpenRequest<'bldr>> {
    let mut builder = FileOpenRequestBuilder::new(_fbb);
    builder.add_perms(args.perms);
    if let Some(x) = args.flags { builder.add_flags(x); }
    if let Some(x) = args.path { builder.add_path(x); }
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(FileOpenRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn flags(&self) -> Option<flatbuffers::Vector<'a, i16>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i16>>>(FileOpenRequest::VT_FLAGS, None)}
  }
  #[inline]
  pub fn perms(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(FileOpenRequest::VT_PERMS, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileOpenRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i16>>>("flags", Self::VT_FLAGS, false)?
     .visit_field::<u32>("perms", Self::VT_PERMS, false)?
     .finish();
    Ok(())
  }
}
pub struct FileOpenRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub flags: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i16>>>,
    pub perms: u32,
}
impl<'a> Default for FileOpenRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileOpenRequestArgs {
      path: None,
      flags: None,
      perms: 0,
    }
  }
}

pub struct FileOpenRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileOpenRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileOpenRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_flags(&mut self, flags: flatbuffers::WIPOffset<flatbuffers::Vector<'b , i16>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileOpenRequest::VT_FLAGS, flags);
  }
  #[inline]
  pub fn add_perms(&mut self, perms: u32) {
    self.fbb_.push_slot::<u32>(FileOpenRequest::VT_PERMS, perms, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileOpenRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileOpenRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileOpenRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileOpenRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileOpenRequest");
      ds.field("path", &self.path());
      ds.field("flags", &self.flags());
      ds.field("perms", &self.perms());
      ds.finish()
  }
}
pub enum FileReadRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileReadRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileReadRequest<'a> {
  type Inner = FileReadRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileReadRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_COUNT: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileReadRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileReadRequestArgs
  ) -> flatbuffers::WIPOffset<FileReadRequest<'bldr>> {
    let mut builder = FileReadRequestBuilder::new(_fbb);
    builder.add_count(args.count);
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileReadRequest::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn count(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(FileReadRequest::VT_COUNT, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileReadRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .visit_field::<u64>("count", Self::VT_COUNT, false)?
     .finish();
    Ok(())
  }
}
pub struct FileReadRequestArgs {
    pub id: i32,
    pub count: u64,
}
impl<'a> Default for FileReadRequestArgs {
  #[inline]
  fn default() -> Self {
    FileReadRequestArgs {
      id: 0,
      count: 0,
    }
  }
}

pub struct FileReadRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileReadRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileReadRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_count(&mut self, count: u64) {
    self.fbb_.push_slot::<u64>(FileReadRequest::VT_COUNT, count, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileReadRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileReadRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileReadRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileReadRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileReadRequest");
      ds.field("id", &self.id());
      ds.field("count", &self.count());
      ds.finish()
  }
}
pub enum FileSeekRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileSeekRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileSeekRequest<'a> {
  type Inner = FileSeekRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileSeekRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_OFFSET: flatbuffers::VOffsetT = 6;
  pub const VT_WHENCE: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileSeekRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileSeekRequestArgs
  ) -> flatbuffers::WIPOffset<FileSeekRequest<'bldr>> {
    let mut builder = FileSeekRequestBuilder::new(_fbb);
    builder.add_offset(args.offset);
    builder.add_id(args.id);
    builder.add_whence(args.whence);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileSeekRequest::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn offset(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(FileSeekRequest::VT_OFFSET, Some(0)).unwrap()}
  }
  #[inline]
  pub fn whence(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(FileSeekRequest::VT_WHENCE, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileSeekRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .visit_field::<i64>("offset", Self::VT_OFFSET, false)?
     .visit_field::<i16>("whence", Self::VT_WHENCE, false)?
     .finish();
    Ok(())
  }
}
pub struct FileSeekRequestArgs {
    pub id: i32,
    pub offset: i64,
    pub whence: i16,
}
impl<'a> Default for FileSeekRequestArgs {
  #[inline]
  fn default() -> Self {
    FileSeekRequestArgs {
      id: 0,
      offset: 0,
      whence: 0,
    }
  }
}

pub struct FileSeekRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileSeekRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileSeekRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_offset(&mut self, offset: i64) {
    self.fbb_.push_slot::<i64>(FileSeekRequest::VT_OFFSET, offset, 0);
  }
  #[inline]
  pub fn add_whence(&mut self, whence: i16) {
    self.fbb_.push_slot::<i16>(FileSeekRequest::VT_WHENCE, whence, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileSeekRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileSeekRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileSeekRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileSeekRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileSeekRequest");
      ds.field("id", &self.id());
      ds.field("offset", &self.offset());
      ds.field("whence", &self.whence());
      ds.finish()
  }
}
pub enum FileStatRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileStatRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileStatRequest<'a> {
  type Inner = FileStatRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileStatRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileStatRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileStatRequestArgs
  ) -> flatbuffers::WIPOffset<FileStatRequest<'bldr>> {
    let mut builder = FileStatRequestBuilder::new(_fbb);
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileStatRequest::VT_ID, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileStatRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .finish();
    Ok(())
  }
}
pub struct FileStatRequestArgs {
    pub id: i32,
}
impl<'a> Default for FileStatRequestArgs {
  #[inline]
  fn default() -> Self {
    FileStatRequestArgs {
      id: 0,
    }
  }
}

pub struct FileStatRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileStatRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileStatRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileStatRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileStatRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileStatRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileStatRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileStatRequest");
      ds.field("id", &self.id());
      ds.finish()
  }
}
pub enum FileWriteRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileWriteRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileWriteRequest<'a> {
  type Inner = FileWriteRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileWriteRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_DATA: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileWriteRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileWriteRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<FileWriteRequest<'bldr>> {
    let mut builder = FileWriteRequestBuilder::new(_fbb);
    if let Some(x) = args.data { builder.add_data(x); }
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileWriteRequest::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn data(&self) -> Option<flatbuffers::Vector<'a, u8>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(FileWriteRequest::VT_DATA, None)}
  }
}

impl flatbuffers::Verifiable for FileWriteRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>("data", Self::VT_DATA, false)?
     .finish();
    Ok(())
  }
}
pub struct FileWriteRequestArgs<'a> {
    pub id: i32,
    pub data: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
}
impl<'a> Default for FileWriteRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileWriteRequestArgs {
      id: 0,
      data: None,
    }
  }
}

pub struct FileWriteRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileWriteRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileWriteRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_data(&mut self, data: flatbuffers::WIPOffset<flatbuffers::Vector<'b , u8>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileWriteRequest::VT_DATA, data);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileWriteRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileWriteRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileWriteRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileWriteRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileWriteRequest");
      ds.field("id", &self.id());
      ds.field("data", &self.data());
      ds.finish()
  }
}
pub enum FileSELinuxGetLabelRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileSELinuxGetLabelRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileSELinuxGetLabelRequest<'a> {
  type Inner = FileSELinuxGetLabelRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileSELinuxGetLabelRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileSELinuxGetLabelRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileSELinuxGetLabelRequestArgs
  ) -> flatbuffers::WIPOffset<FileSELinuxGetLabelRequest<'bldr>> {
    let mut builder = FileSELinuxGetLabelRequestBuilder::new(_fbb);
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileSELinuxGetLabelRequest::VT_ID, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileSELinuxGetLabelRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .finish();
    Ok(())
  }
}
pub struct FileSELinuxGetLabelRequestArgs {
    pub id: i32,
}
impl<'a> Default for FileSELinuxGetLabelRequestArgs {
  #[inline]
  fn default() -> Self {
    FileSELinuxGetLabelRequestArgs {
      id: 0,
    }
  }
}

pub struct FileSELinuxGetLabelRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileSELinuxGetLabelRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileSELinuxGetLabelRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileSELinuxGetLabelRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileSELinuxGetLabelRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileSELinuxGetLabelRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileSELinuxGetLabelRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileSELinuxGetLabelRequest");
      ds.field("id", &self.id());
      ds.finish()
  }
}
pub enum FileSELinuxSetLabelRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileSELinuxSetLabelRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileSELinuxSetLabelRequest<'a> {
  type Inner = FileSELinuxSetLabelRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileSELinuxSetLabelRequest<'a> {
  pub const VT_ID: flatbuffers::VOffsetT = 4;
  pub const VT_LABEL: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileSELinuxSetLabelRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileSELinuxSetLabelRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<FileSELinuxSetLabelRequest<'bldr>> {
    let mut builder = FileSELinuxSetLabelRequestBuilder::new(_fbb);
    if let Some(x) = args.label { builder.add_label(x); }
    builder.add_id(args.id);
    builder.finish()
  }


  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileSELinuxSetLabelRequest::VT_ID, Some(0)).unwrap()}
  }
  #[inline]
  pub fn label(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(FileSELinuxSetLabelRequest::VT_LABEL, None)}
  }
}

impl flatbuffers::Verifiable for FileSELinuxSetLabelRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("label", Self::VT_LABEL, false)?
     .finish();
    Ok(())
  }
}
pub struct FileSELinuxSetLabelRequestArgs<'a> {
    pub id: i32,
    pub label: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for FileSELinuxSetLabelRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileSELinuxSetLabelRequestArgs {
      id: 0,
      label: None,
    }
  }
}

pub struct FileSELinuxSetLabelRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileSELinuxSetLabelRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileSELinuxSetLabelRequest::VT_ID, id, 0);
  }
  #[inline]
  pub fn add_label(&mut self, label: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileSELinuxSetLabelRequest::VT_LABEL, label);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileSELinuxSetLabelRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileSELinuxSetLabelRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileSELinuxSetLabelRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileSELinuxSetLabelRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileSELinuxSetLabelRequest");
      ds.field("id", &self.id());
      ds.field("label", &self.label());
      ds.finish()
  }
}
pub enum PathChmodRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathChmodRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathChmodRequest<'a> {
  type Inner = PathChmodRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathChmodRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_MODE: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathChmodRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathChmodRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathChmodRequest<'bldr>> {
    let mut builder = PathChmodRequestBuilder::new(_fbb);
    builder.add_mode(args.mode);
    if let Some(x) = args.path { builder.add_path(x); }
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathChmodRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn mode(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(PathChmodRequest::VT_MODE, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for PathChmodRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<u32>("mode", Self::VT_MODE, false)?
     .finish();
    Ok(())
  }
}
pub struct PathChmodRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub mode: u32,
}
impl<'a> Default for PathChmodRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathChmodRequestArgs {
      path: None,
      mode: 0,
    }
  }
}

pub struct PathChmodRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathChmodRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathChmodRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_mode(&mut self, mode: u32) {
    self.fbb_.push_slot::<u32>(PathChmodRequest::VT_MODE, mode, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathChmodRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathChmodRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathChmodRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathChmodRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathChmodRequest");
      ds.field("path", &self.path());
      ds.field("mode", &self.mode());
      ds.finish()
  }
}
pub enum PathCopyRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathCopyRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathCopyRequest<'a> {
  type Inner = PathCopyRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathCopyRequest<'a> {
  pub const VT_SOURCE: flatbuffers::VOffsetT = 4;
  pub const VT_TARGET: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathCopyRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathCopyRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathCopyRequest<'bldr>> {
    let mut builder = PathCopyRequestBuilder::new(_fbb);
    if let Some(x) = args.target { builder.add_target(x); }
    if let Some(x) = args.source { builder.add_source(x); }
    builder.finish()
  }


  #[inline]
  pub fn source(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathCopyRequest::VT_SOURCE, None)}
  }
  #[inline]
  pub fn target(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathCopyRequest::VT_TARGET, None)}
  }
}

impl flatbuffers::Verifiable for PathCopyRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("source", Self::VT_SOURCE, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("target", Self::VT_TARGET, false)?
     .finish();
    Ok(())
  }
}
pub struct PathCopyRequestArgs<'a> {
    pub source: Option<flatbuffers::WIPOffset<&'a str>>,
    pub target: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for PathCopyRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathCopyRequestArgs {
      source: None,
      target: None,
    }
  }
}

pub struct PathCopyRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathCopyRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_source(&mut self, source: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathCopyRequest::VT_SOURCE, source);
  }
  #[inline]
  pub fn add_target(&mut self, target: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathCopyRequest::VT_TARGET, target);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathCopyRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathCopyRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathCopyRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathCopyRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathCopyRequest");
      ds.field("source", &self.source());
      ds.field("target", &self.target());
      ds.finish()
  }
}
pub enum PathSELinuxGetLabelRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathSELinuxGetLabelRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathSELinuxGetLabelRequest<'a> {
  type Inner = PathSELinuxGetLabelRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathSELinuxGetLabelRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_FOLLOW_SYMLINKS: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathSELinuxGetLabelRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathSELinuxGetLabelRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathSELinuxGetLabelRequest<'bldr>> {
    let mut builder = PathSELinuxGetLabelRequestBuilder::new(_fbb);
    if let Some(x) = args.path { builder.add_path(x); }
    builder.add_follow_symlinks(args.follow_symlinks);
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathSELinuxGetLabelRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn follow_symlinks(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(PathSELinuxGetLabelRequest::VT_FOLLOW_SYMLINKS, Some(false)).unwrap()}
  }
}

impl flatbuffers::Verifiable for PathSELinuxGetLabelRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<bool>("follow_symlinks", Self::VT_FOLLOW_SYMLINKS, false)?
     .finish();
    Ok(())
  }
}
pub struct PathSELinuxGetLabelRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub follow_symlinks: bool,
}
impl<'a> Default for PathSELinuxGetLabelRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathSELinuxGetLabelRequestArgs {
      path: None,
      follow_symlinks: false,
    }
  }
}

pub struct PathSELinuxGetLabelRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathSELinuxGetLabelRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathSELinuxGetLabelRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_follow_symlinks(&mut self, follow_symlinks: bool) {
    self.fbb_.push_slot::<bool>(PathSELinuxGetLabelRequest::VT_FOLLOW_SYMLINKS, follow_symlinks, false);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathSELinuxGetLabelRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathSELinuxGetLabelRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathSELinuxGetLabelRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathSELinuxGetLabelRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathSELinuxGetLabelRequest");
      ds.field("path", &self.path());
      ds.field("follow_symlinks", &self.follow_symlinks());
      ds.finish()
  }
}
pub enum PathSELinuxSetLabelRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathSELinuxSetLabelRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathSELinuxSetLabelRequest<'a> {
  type Inner = PathSELinuxSetLabelRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathSELinuxSetLabelRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_LABEL: flatbuffers::VOffsetT = 6;
  pub const VT_FOLLOW_SYMLINKS: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathSELinuxSetLabelRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathSELinuxSetLabelRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathSELinuxSetLabelRequest<'bldr>> {
    let mut builder = PathSELinuxSetLabelRequestBuilder::new(_fbb);
    if let Some(x) = args.label { builder.add_label(x); }
    if let Some(x) = args.path { builder.add_path(x); }
    builder.add_follow_symlinks(args.follow_symlinks);
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathSELinuxSetLabelRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn label(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathSELinuxSetLabelRequest::VT_LABEL, None)}
  }
  #[inline]
  pub fn follow_symlinks(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(PathSELinuxSetLabelRequest::VT_FOLLOW_SYMLINKS, Some(false)).unwrap()}
  }
}

impl flatbuffers::Verifiable for PathSELinuxSetLabelRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("label", Self::VT_LABEL, false)?
     .visit_field::<bool>("follow_symlinks", Self::VT_FOLLOW_SYMLINKS, false)?
     .finish();
    Ok(())
  }
}
pub struct PathSELinuxSetLabelRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub label: Option<flatbuffers::WIPOffset<&'a str>>,
    pub follow_symlinks: bool,
}
impl<'a> Default for PathSELinuxSetLabelRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathSELinuxSetLabelRequestArgs {
      path: None,
      label: None,
      follow_symlinks: false,
    }
  }
}

pub struct PathSELinuxSetLabelRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathSELinuxSetLabelRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathSELinuxSetLabelRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_label(&mut self, label: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathSELinuxSetLabelRequest::VT_LABEL, label);
  }
  #[inline]
  pub fn add_follow_symlinks(&mut self, follow_symlinks: bool) {
    self.fbb_.push_slot::<bool>(PathSELinuxSetLabelRequest::VT_FOLLOW_SYMLINKS, follow_symlinks, false);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathSELinuxSetLabelRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathSELinuxSetLabelRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathSELinuxSetLabelRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathSELinuxSetLabelRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathSELinuxSetLabelRequest");
      ds.field("path", &self.path());
      ds.field("label", &self.label());
      ds.field("follow_symlinks", &self.follow_symlinks());
      ds.finish()
  }
}
pub enum PathGetDirectorySizeRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathGetDirectorySizeRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathGetDirectorySizeRequest<'a> {
  type Inner = PathGetDirectorySizeRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathGetDirectorySizeRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_EXCLUSIONS: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathGetDirectorySizeRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathGetDirectorySizeRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathGetDirectorySizeRequest<'bldr>> {
    let mut builder = PathGetDirectorySizeRequestBuilder::new(_fbb);
    if let Some(x) = args.exclusions { builder.add_exclusions(x); }
    if let Some(x) = args.path { builder.add_path(x); }
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathGetDirectorySizeRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn exclusions(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>(PathGetDirectorySizeRequest::VT_EXCLUSIONS, None)}
  }
}

impl flatbuffers::Verifiable for PathGetDirectorySizeRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&'_ str>>>>("exclusions", Self::VT_EXCLUSIONS, false)?
     .finish();
    Ok(())
  }
}
pub struct PathGetDirectorySizeRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub exclusions: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>,
}
impl<'a> Default for PathGetDirectorySizeRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathGetDirectorySizeRequestArgs {
      path: None,
      exclusions: None,
    }
  }
}

pub struct PathGetDirectorySizeRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathGetDirectorySizeRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathGetDirectorySizeRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_exclusions(&mut self, exclusions: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<&'b  str>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathGetDirectorySizeRequest::VT_EXCLUSIONS, exclusions);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathGetDirectorySizeRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathGetDirectorySizeRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathGetDirectorySizeRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathGetDirectorySizeRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathGetDirectorySizeRequest");
      ds.field("path", &self.path());
      ds.field("exclusions", &self.exclusions());
      ds.finish()
  }
}
pub enum PathDeleteRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathDeleteRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathDeleteRequest<'a> {
  type Inner = PathDeleteRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathDeleteRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_FLAG: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathDeleteRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathDeleteRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathDeleteRequest<'bldr>> {
    let mut builder = PathDeleteRequestBuilder::new(_fbb);
    if let Some(x) = args.path { builder.add_path(x); }
    builder.add_flag(args.flag);
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathDeleteRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn flag(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(PathDeleteRequest::VT_FLAG, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for PathDeleteRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<i16>("flag", Self::VT_FLAG, false)?
     .finish();
    Ok(())
  }
}
pub struct PathDeleteRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub flag: i16,
}
impl<'a> Default for PathDeleteRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathDeleteRequestArgs {
      path: None,
      flag: 0,
    }
  }
}

pub struct PathDeleteRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathDeleteRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathDeleteRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_flag(&mut self, flag: i16) {
    self.fbb_.push_slot::<i16>(PathDeleteRequest::VT_FLAG, flag, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathDeleteRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathDeleteRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathDeleteRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathDeleteRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathDeleteRequest");
      ds.field("path", &self.path());
      ds.field("flag", &self.flag());
      ds.finish()
  }
}
pub enum PathMkdirRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathMkdirRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathMkdirRequest<'a> {
  type Inner = PathMkdirRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathMkdirRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_MODE: flatbuffers::VOffsetT = 6;
  pub const VT_RECURSIVE: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathMkdirRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathMkdirRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathMkdirRequest<'bldr>> {
    let mut builder = PathMkdirRequestBuilder::new(_fbb);
    builder.add_mode(args.mode);
    if let Some(x) = args.path { builder.add_path(x); }
    builder.add_recursive(args.recursive);
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathMkdirRequest::VT_PATH, None)}
  }
  #[inline]
  pub fn mode(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(PathMkdirRequest::VT_MODE, Some(0)).unwrap()}
  }
  #[inline]
  pub fn recursive(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(PathMkdirRequest::VT_RECURSIVE, Some(false)).unwrap()}
  }
}

impl flatbuffers::Verifiable for PathMkdirRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .visit_field::<u32>("mode", Self::VT_MODE, false)?
     .visit_field::<bool>("recursive", Self::VT_RECURSIVE, false)?
     .finish();
    Ok(())
  }
}
pub struct PathMkdirRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub mode: u32,
    pub recursive: bool,
}
impl<'a> Default for PathMkdirRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathMkdirRequestArgs {
      path: None,
      mode: 0,
      recursive: false,
    }
  }
}

pub struct PathMkdirRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathMkdirRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathMkdirRequest::VT_PATH, path);
  }
  #[inline]
  pub fn add_mode(&mut self, mode: u32) {
    self.fbb_.push_slot::<u32>(PathMkdirRequest::VT_MODE, mode, 0);
  }
  #[inline]
  pub fn add_recursive(&mut self, recursive: bool) {
    self.fbb_.push_slot::<bool>(PathMkdirRequest::VT_RECURSIVE, recursive, false);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathMkdirRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathMkdirRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathMkdirRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathMkdirRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathMkdirRequest");
      ds.field("path", &self.path());
      ds.field("mode", &self.mode());
      ds.field("recursive", &self.recursive());
      ds.finish()
  }
}
pub enum PathReadlinkRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathReadlinkRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathReadlinkRequest<'a> {
  type Inner = PathReadlinkRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathReadlinkRequest<'a> {
  pub const VT_PATH: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathReadlinkRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathReadlinkRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<PathReadlinkRequest<'bldr>> {
    let mut builder = PathReadlinkRequestBuilder::new(_fbb);
    if let Some(x) = args.path { builder.add_path(x); }
    builder.finish()
  }


  #[inline]
  pub fn path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathReadlinkRequest::VT_PATH, None)}
  }
}

impl flatbuffers::Verifiable for PathReadlinkRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("path", Self::VT_PATH, false)?
     .finish();
    Ok(())
  }
}
pub struct PathReadlinkRequestArgs<'a> {
    pub path: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for PathReadlinkRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathReadlinkRequestArgs {
      path: None,
    }
  }
}

pub struct PathReadlinkRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathReadlinkRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_path(&mut self, path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathReadlinkRequest::VT_PATH, path);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathReadlinkRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathReadlinkRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathReadlinkRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathReadlinkRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathReadlinkRequest");
      ds.field("path", &self.path());
      ds.finish()
  }
}
pub enum SignedExecRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct SignedExecRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SignedExecRequest<'a> {
  type Inner = SignedExecRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> SignedExecRequest<'a> {
  pub const VT_BINARY_PATH: flatbuffers::VOffsetT = 4;
  pub const VT_SIGNATURE_PATH: flatbuffers::VOffsetT = 6;
  pub const VT_ARG0: flatbuffers::VOffsetT = 8;
  pub const VT_ARGS: flatbuffers::VOffsetT = 10;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    SignedExecRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args SignedExecRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<SignedExecRequest<'bldr>> {
    let mut builder = SignedExecRequestBuilder::new(_fbb);
    if let Some(x) = args.args { builder.add_args(x); }
    if let Some(x) = args.arg0 { builder.add_arg0(x); }
    if let Some(x) = args.signature_path { builder.add_signature_path(x); }
    if let Some(x) = args.binary_path { builder.add_binary_path(x); }
    builder.finish()
  }


  #[inline]
  pub fn binary_path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SignedExecRequest::VT_BINARY_PATH, None)}
  }
  #[inline]
  pub fn signature_path(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SignedExecRequest::VT_SIGNATURE_PATH, None)}
  }
  #[inline]
  pub fn arg0(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SignedExecRequest::VT_ARG0, None)}
  }
  #[inline]
  pub fn args(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>(SignedExecRequest::VT_ARGS, None)}
  }
}

impl flatbuffers::Verifiable for SignedExecRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("binary_path", Self::VT_BINARY_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("signature_path", Self::VT_SIGNATURE_PATH, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("arg0", Self::VT_ARG0, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&'_ str>>>>("args", Self::VT_ARGS, false)?
     .finish();
    Ok(())
  }
}
pub struct SignedExecRequestArgs<'a> {
    pub binary_path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub signature_path: Option<flatbuffers::WIPOffset<&'a str>>,
    pub arg0: Option<flatbuffers::WIPOffset<&'a str>>,
    pub args: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>,
}
impl<'a> Default for SignedExecRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    SignedExecRequestArgs {
      binary_path: None,
      signature_path: None,
      arg0: None,
      args: None,
    }
  }
}

pub struct SignedExecRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> SignedExecRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_binary_path(&mut self, binary_path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecRequest::VT_BINARY_PATH, binary_path);
  }
  #[inline]
  pub fn add_signature_path(&mut self, signature_path: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecRequest::VT_SIGNATURE_PATH, signature_path);
  }
  #[inline]
  pub fn add_arg0(&mut self, arg0: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecRequest::VT_ARG0, arg0);
  }
  #[inline]
  pub fn add_args(&mut self, args: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<&'b  str>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecRequest::VT_ARGS, args);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> SignedExecRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    SignedExecRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<SignedExecRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for SignedExecRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("SignedExecRequest");
      ds.field("binary_path", &self.binary_path());
      ds.field("signature_path", &self.signature_path());
      ds.field("arg0", &self.arg0());
      ds.field("args", &self.args());
      ds.finish()
  }
}
pub enum MbGetVersionRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetVersionRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetVersionRequest<'a> {
  type Inner = MbGetVersionRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetVersionRequest<'a> {
  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetVersionRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    _args: &'args MbGetVersionRequestArgs
  ) -> flatbuffers::WIPOffset<MbGetVersionRequest<'bldr>> {
    let mut builder = MbGetVersionRequestBuilder::new(_fbb);
    builder.finish()
  }


}

impl flatbuffers::Verifiable for MbGetVersionRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .finish();
    Ok(())
  }
}
pub struct MbGetVersionRequestArgs {
}
impl<'a> Default for MbGetVersionRequestArgs {
  #[inline]
  fn default() -> Self {
    MbGetVersionRequestArgs {
    }
  }
}

pub struct MbGetVersionRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetVersionRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetVersionRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetVersionRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetVersionRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetVersionRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetVersionRequest");
      ds.finish()
  }
}
pub enum MbGetInstalledRomsRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetInstalledRomsRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetInstalledRomsRequest<'a> {
  type Inner = MbGetInstalledRomsRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetInstalledRomsRequest<'a> {
  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetInstalledRomsRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    _args: &'args MbGetInstalledRomsRequestArgs
  ) -> flatbuffers::WIPOffset<MbGetInstalledRomsRequest<'bldr>> {
    let mut builder = MbGetInstalledRomsRequestBuilder::new(_fbb);
    builder.finish()
  }


}

impl flatbuffers::Verifiable for MbGetInstalledRomsRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .finish();
    Ok(())
  }
}
pub struct MbGetInstalledRomsRequestArgs {
}
impl<'a> Default for MbGetInstalledRomsRequestArgs {
  #[inline]
  fn default() -> Self {
    MbGetInstalledRomsRequestArgs {
    }
  }
}

pub struct MbGetInstalledRomsRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetInstalledRomsRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetInstalledRomsRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetInstalledRomsRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetInstalledRomsRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetInstalledRomsRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetInstalledRomsRequest");
      ds.finish()
  }
}
pub enum MbGetBootedRomIdRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetBootedRomIdRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetBootedRomIdRequest<'a> {
  type Inner = MbGetBootedRomIdRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetBootedRomIdRequest<'a> {
  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetBootedRomIdRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    _args: &'args MbGetBootedRomIdRequestArgs
  ) -> flatbuffers::WIPOffset<MbGetBootedRomIdRequest<'bldr>> {
    let mut builder = MbGetBootedRomIdRequestBuilder::new(_fbb);
    builder.finish()
  }


}

impl flatbuffers::Verifiable for MbGetBootedRomIdRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .finish();
    Ok(())
  }
}
pub struct MbGetBootedRomIdRequestArgs {
}
impl<'a> Default for MbGetBootedRomIdRequestArgs {
  #[inline]
  fn default() -> Self {
    MbGetBootedRomIdRequestArgs {
    }
  }
}

pub struct MbGetBootedRomIdRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetBootedRomIdRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetBootedRomIdRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetBootedRomIdRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetBootedRomIdRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetBootedRomIdRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetBootedRomIdRequest");
      ds.finish()
  }
}
pub enum MbSwitchRomRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbSwitchRomRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbSwitchRomRequest<'a> {
  type Inner = MbSwitchRomRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbSwitchRomRequest<'a> {
  pub const VT_ROM_ID: flatbuffers::VOffsetT = 4;
  pub const VT_BOOT_BLOCKDEV: flatbuffers::VOffsetT = 6;
  pub const VT_BLOCKDEV_BASE_DIRS: flatbuffers::VOffsetT = 8;
  pub const VT_FORCE_UPDATE_CHECKSUMS: flatbuffers::VOffsetT = 10;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbSwitchRomRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbSwitchRomRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<MbSwitchRomRequest<'bldr>> {
    let mut builder = MbSwitchRomRequestBuilder::new(_fbb);
    if let Some(x) = args.blockdev_base_dirs { builder.add_blockdev_base_dirs(x); }
    if let Some(x) = args.boot_blockdev { builder.add_boot_blockdev(x); }
    if let Some(x) = args.rom_id { builder.add_rom_id(x); }
    builder.add_force_update_checksums(args.force_update_checksums);
    builder.finish()
  }


  #[inline]
  pub fn rom_id(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbSwitchRomRequest::VT_ROM_ID, None)}
  }
  #[inline]
  pub fn boot_blockdev(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbSwitchRomRequest::VT_BOOT_BLOCKDEV, None)}
  }
  #[inline]
  pub fn blockdev_base_dirs(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>(MbSwitchRomRequest::VT_BLOCKDEV_BASE_DIRS, None)}
  }
  #[inline]
  pub fn force_update_checksums(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(MbSwitchRomRequest::VT_FORCE_UPDATE_CHECKSUMS, Some(false)).unwrap()}
  }
}

impl flatbuffers::Verifiable for MbSwitchRomRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("rom_id", Self::VT_ROM_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("boot_blockdev", Self::VT_BOOT_BLOCKDEV, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<&'_ str>>>>("blockdev_base_dirs", Self::VT_BLOCKDEV_BASE_DIRS, false)?
     .visit_field::<bool>("force_update_checksums", Self::VT_FORCE_UPDATE_CHECKSUMS, false)?
     .finish();
    Ok(())
  }
}
pub struct MbSwitchRomRequestArgs<'a> {
    pub rom_id: Option<flatbuffers::WIPOffset<&'a str>>,
    pub boot_blockdev: Option<flatbuffers::WIPOffset<&'a str>>,
    pub blockdev_base_dirs: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<&'a str>>>>,
    pub force_update_checksums: bool,
}
impl<'a> Default for MbSwitchRomRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbSwitchRomRequestArgs {
      rom_id: None,
      boot_blockdev: None,
      blockdev_base_dirs: None,
      force_update_checksums: false,
    }
  }
}

pub struct MbSwitchRomRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbSwitchRomRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_rom_id(&mut self, rom_id: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbSwitchRomRequest::VT_ROM_ID, rom_id);
  }
  #[inline]
  pub fn add_boot_blockdev(&mut self, boot_blockdev: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbSwitchRomRequest::VT_BOOT_BLOCKDEV, boot_blockdev);
  }
  #[inline]
  pub fn add_blockdev_base_dirs(&mut self, blockdev_base_dirs: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<&'b  str>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbSwitchRomRequest::VT_BLOCKDEV_BASE_DIRS, blockdev_base_dirs);
  }
  #[inline]
  pub fn add_force_update_checksums(&mut self, force_update_checksums: bool) {
    self.fbb_.push_slot::<bool>(MbSwitchRomRequest::VT_FORCE_UPDATE_CHECKSUMS, force_update_checksums, false);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbSwitchRomRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbSwitchRomRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbSwitchRomRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbSwitchRomRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbSwitchRomRequest");
      ds.field("rom_id", &self.rom_id());
      ds.field("boot_blockdev", &self.boot_blockdev());
      ds.field("blockdev_base_dirs", &self.blockdev_base_dirs());
      ds.field("force_update_checksums", &self.force_update_checksums());
      ds.finish()
  }
}
pub enum MbSetKernelRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbSetKernelRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbSetKernelRequest<'a> {
  type Inner = MbSetKernelRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbSetKernelRequest<'a> {
  pub const VT_ROM_ID: flatbuffers::VOffsetT = 4;
  pub const VT_BOOT_BLOCKDEV: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbSetKernelRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbSetKernelRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<MbSetKernelRequest<'bldr>> {
    let mut builder = MbSetKernelRequestBuilder::new(_fbb);
    if let Some(x) = args.boot_blockdev { builder.add_boot_blockdev(x); }
    if let Some(x) = args.rom_id { builder.add_rom_id(x); }
    builder.finish()
  }


  #[inline]
  pub fn rom_id(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbSetKernelRequest::VT_ROM_ID, None)}
  }
  #[inline]
  pub fn boot_blockdev(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbSetKernelRequest::VT_BOOT_BLOCKDEV, None)}
  }
}

impl flatbuffers::Verifiable for MbSetKernelRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("rom_id", Self::VT_ROM_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("boot_blockdev", Self::VT_BOOT_BLOCKDEV, false)?
     .finish();
    Ok(())
  }
}
pub struct MbSetKernelRequestArgs<'a> {
    pub rom_id: Option<flatbuffers::WIPOffset<&'a str>>,
    pub boot_blockdev: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for MbSetKernelRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbSetKernelRequestArgs {
      rom_id: None,
      boot_blockdev: None,
    }
  }
}

pub struct MbSetKernelRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbSetKernelRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_rom_id(&mut self, rom_id: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbSetKernelRequest::VT_ROM_ID, rom_id);
  }
  #[inline]
  pub fn add_boot_blockdev(&mut self, boot_blockdev: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbSetKernelRequest::VT_BOOT_BLOCKDEV, boot_blockdev);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbSetKernelRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbSetKernelRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbSetKernelRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbSetKernelRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbSetKernelRequest");
      ds.field("rom_id", &self.rom_id());
      ds.field("boot_blockdev", &self.boot_blockdev());
      ds.finish()
  }
}
pub enum MbWipeRomRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbWipeRomRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbWipeRomRequest<'a> {
  type Inner = MbWipeRomRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbWipeRomRequest<'a> {
  pub const VT_ROM_ID: flatbuffers::VOffsetT = 4;
  pub const VT_TARGETS: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbWipeRomRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbWipeRomRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<MbWipeRomRequest<'bldr>> {
    let mut builder = MbWipeRomRequestBuilder::new(_fbb);
    if let Some(x) = args.targets { builder.add_targets(x); }
    if let Some(x) = args.rom_id { builder.add_rom_id(x); }
    builder.finish()
  }


  #[inline]
  pub fn rom_id(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbWipeRomRequest::VT_ROM_ID, None)}
  }
  #[inline]
  pub fn targets(&self) -> Option<flatbuffers::Vector<'a, i16>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i16>>>(MbWipeRomRequest::VT_TARGETS, None)}
  }
}

impl flatbuffers::Verifiable for MbWipeRomRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("rom_id", Self::VT_ROM_ID, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i16>>>("targets", Self::VT_TARGETS, false)?
     .finish();
    Ok(())
  }
}
pub struct MbWipeRomRequestArgs<'a> {
    pub rom_id: Option<flatbuffers::WIPOffset<&'a str>>,
    pub targets: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i16>>>,
}
impl<'a> Default for MbWipeRomRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbWipeRomRequestArgs {
      rom_id: None,
      targets: None,
    }
  }
}

pub struct MbWipeRomRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbWipeRomRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_rom_id(&mut self, rom_id: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbWipeRomRequest::VT_ROM_ID, rom_id);
  }
  #[inline]
  pub fn add_targets(&mut self, targets: flatbuffers::WIPOffset<flatbuffers::Vector<'b , i16>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbWipeRomRequest::VT_TARGETS, targets);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbWipeRomRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbWipeRomRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbWipeRomRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbWipeRomRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbWipeRomRequest");
      ds.field("rom_id", &self.rom_id());
      ds.field("targets", &self.targets());
      ds.finish()
  }
}
pub enum MbGetPackagesCountRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetPackagesCountRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetPackagesCountRequest<'a> {
  type Inner = MbGetPackagesCountRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetPackagesCountRequest<'a> {
  pub const VT_ROM_ID: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetPackagesCountRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbGetPackagesCountRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<MbGetPackagesCountRequest<'bldr>> {
    let mut builder = MbGetPackagesCountRequestBuilder::new(_fbb);
    if let Some(x) = args.rom_id { builder.add_rom_id(x); }
    builder.finish()
  }


  #[inline]
  pub fn rom_id(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbGetPackagesCountRequest::VT_ROM_ID, None)}
  }
}

impl flatbuffers::Verifiable for MbGetPackagesCountRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("rom_id", Self::VT_ROM_ID, false)?
     .finish();
    Ok(())
  }
}
pub struct MbGetPackagesCountRequestArgs<'a> {
    pub rom_id: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for MbGetPackagesCountRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbGetPackagesCountRequestArgs {
      rom_id: None,
    }
  }
}

pub struct MbGetPackagesCountRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetPackagesCountRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_rom_id(&mut self, rom_id: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbGetPackagesCountRequest::VT_ROM_ID, rom_id);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetPackagesCountRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetPackagesCountRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetPackagesCountRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetPackagesCountRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetPackagesCountRequest");
      ds.field("rom_id", &self.rom_id());
      ds.finish()
  }
}
pub enum RebootRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct RebootRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for RebootRequest<'a> {
  type Inner = RebootRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> RebootRequest<'a> {
  pub const VT_TYPE_: flatbuffers::VOffsetT = 4;
  pub const VT_ARG: flatbuffers::VOffsetT = 6;
  pub const VT_CONFIRM: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    RebootRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args RebootRequestArgs<'args>
  ) -> flatbuffers::WIPOffset<RebootRequest<'bldr>> {
    let mut builder = RebootRequestBuilder::new(_fbb);
    if let Some(x) = args.arg { builder.add_arg(x); }
    builder.add_type_(args.type_);
    builder.add_confirm(args.confirm);
    builder.finish()
  }


  #[inline]
  pub fn type_(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(RebootRequest::VT_TYPE_, Some(0)).unwrap()}
  }
  #[inline]
  pub fn arg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(RebootRequest::VT_ARG, None)}
  }
  #[inline]
  pub fn confirm(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(RebootRequest::VT_CONFIRM, Some(false)).unwrap()}
  }
}

impl flatbuffers::Verifiable for RebootRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i16>("type_", Self::VT_TYPE_, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("arg", Self::VT_ARG, false)?
     .visit_field::<bool>("confirm", Self::VT_CONFIRM, false)?
     .finish();
    Ok(())
  }
}
pub struct RebootRequestArgs<'a> {
    pub type_: i16,
    pub arg: Option<flatbuffers::WIPOffset<&'a str>>,
    pub confirm: bool,
}
impl<'a> Default for RebootRequestArgs<'a> {
  #[inline]
  fn default() -> Self {
    RebootRequestArgs {
      type_: 0,
      arg: None,
      confirm: false,
    }
  }
}

pub struct RebootRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RebootRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_type_(&mut self, type_: i16) {
    self.fbb_.push_slot::<i16>(RebootRequest::VT_TYPE_, type_, 0);
  }
  #[inline]
  pub fn add_arg(&mut self, arg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(RebootRequest::VT_ARG, arg);
  }
  #[inline]
  pub fn add_confirm(&mut self, confirm: bool) {
    self.fbb_.push_slot::<bool>(RebootRequest::VT_CONFIRM, confirm, false);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> RebootRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    RebootRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<RebootRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for RebootRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("RebootRequest");
      ds.field("type_", &self.type_());
      ds.field("arg", &self.arg());
      ds.field("confirm", &self.confirm());
      ds.finish()
  }
}
pub enum ShutdownRequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct ShutdownRequest<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ShutdownRequest<'a> {
  type Inner = ShutdownRequest<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> ShutdownRequest<'a> {
  pub const VT_TYPE_: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    ShutdownRequest { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args ShutdownRequestArgs
  ) -> flatbuffers::WIPOffset<ShutdownRequest<'bldr>> {
    let mut builder = ShutdownRequestBuilder::new(_fbb);
    builder.add_type_(args.type_);
    builder.finish()
  }


  #[inline]
  pub fn type_(&self) -> i16 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i16>(ShutdownRequest::VT_TYPE_, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for ShutdownRequest<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<i16>("type_", Self::VT_TYPE_, false)?
     .finish();
    Ok(())
  }
}
pub struct ShutdownRequestArgs {
    pub type_: i16,
}
impl<'a> Default for ShutdownRequestArgs {
  #[inline]
  fn default() -> Self {
    ShutdownRequestArgs {
      type_: 0,
    }
  }
}

pub struct ShutdownRequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ShutdownRequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_type_(&mut self, type_: i16) {
    self.fbb_.push_slot::<i16>(ShutdownRequest::VT_TYPE_, type_, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> ShutdownRequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    ShutdownRequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<ShutdownRequest<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for ShutdownRequest<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("ShutdownRequest");
      ds.field("type_", &self.type_());
      ds.finish()
  }
}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_REQUEST_TYPE: u8 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_REQUEST_TYPE: u8 = 27;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_REQUEST_TYPE: [RequestType; 28] = [
  RequestType::NONE,
  RequestType::FileChmodRequest,
  RequestType::FileCloseRequest,
  RequestType::FileOpenRequest,
  RequestType::FileReadRequest,
  RequestType::FileSeekRequest,
  RequestType::FileStatRequest,
  RequestType::FileWriteRequest,
  RequestType::FileSELinuxGetLabelRequest,
  RequestType::FileSELinuxSetLabelRequest,
  RequestType::PathChmodRequest,
  RequestType::PathCopyRequest,
  RequestType::PathSELinuxGetLabelRequest,
  RequestType::PathSELinuxSetLabelRequest,
  RequestType::PathGetDirectorySizeRequest,
  RequestType::SignedExecRequest,
  RequestType::MbGetVersionRequest,
  RequestType::MbGetInstalledRomsRequest,
  RequestType::MbGetBootedRomIdRequest,
  RequestType::MbSwitchRomRequest,
  RequestType::MbSetKernelRequest,
  RequestType::RebootRequest,
  RequestType::MbWipeRomRequest,
  RequestType::MbGetPackagesCountRequest,
  RequestType::PathDeleteRequest,
  RequestType::PathMkdirRequest,
  RequestType::PathReadlinkRequest,
  RequestType::ShutdownRequest,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct RequestType(pub u8);
#[allow(non_upper_case_globals)]
impl RequestType {
  pub const NONE: Self = Self(0);
  pub const FileChmodRequest: Self = Self(1);
  pub const FileCloseRequest: Self = Self(2);
  pub const FileOpenRequest: Self = Self(3);
  pub const FileReadRequest: Self = Self(4);
  pub const FileSeekRequest: Self = Self(5);
  pub const FileStatRequest: Self = Self(6);
  pub const FileWriteRequest: Self = Self(7);
  pub const FileSELinuxGetLabelRequest: Self = Self(8);
  pub const FileSELinuxSetLabelRequest: Self = Self(9);
  pub const PathChmodRequest: Self = Self(10);
  pub const PathCopyRequest: Self = Self(11);
  pub const PathSELinuxGetLabelRequest: Self = Self(12);
  pub const PathSELinuxSetLabelRequest: Self = Self(13);
  pub const PathGetDirectorySizeRequest: Self = Self(14);
  pub const SignedExecRequest: Self = Self(15);
  pub const MbGetVersionRequest: Self = Self(16);
  pub const MbGetInstalledRomsRequest: Self = Self(17);
  pub const MbGetBootedRomIdRequest: Self = Self(18);
  pub const MbSwitchRomRequest: Self = Self(19);
  pub const MbSetKernelRequest: Self = Self(20);
  pub const RebootRequest: Self = Self(21);
  pub const MbWipeRomRequest: Self = Self(22);
  pub const MbGetPackagesCountRequest: Self = Self(23);
  pub const PathDeleteRequest: Self = Self(24);
  pub const PathMkdirRequest: Self = Self(25);
  pub const PathReadlinkRequest: Self = Self(26);
  pub const ShutdownRequest: Self = Self(27);

  pub const ENUM_MIN: u8 = 0;
  pub const ENUM_MAX: u8 = 27;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::NONE,
    Self::FileChmodRequest,
    Self::FileCloseRequest,
    Self::FileOpenRequest,
    Self::FileReadRequest,
    Self::FileSeekRequest,
    Self::FileStatRequest,
    Self::FileWriteRequest,
    Self::FileSELinuxGetLabelRequest,
    Self::FileSELinuxSetLabelRequest,
    Self::PathChmodRequest,
    Self::PathCopyRequest,
    Self::PathSELinuxGetLabelRequest,
    Self::PathSELinuxSetLabelRequest,
    Self::PathGetDirectorySizeRequest,
    Self::SignedExecRequest,
    Self::MbGetVersionRequest,
    Self::MbGetInstalledRomsRequest,
    Self::MbGetBootedRomIdRequest,
    Self::MbSwitchRomRequest,
    Self::MbSetKernelRequest,
    Self::RebootRequest,
    Self::MbWipeRomRequest,
    Self::MbGetPackagesCountRequest,
    Self::PathDeleteRequest,
    Self::PathMkdirRequest,
    Self::PathReadlinkRequest,
    Self::ShutdownRequest,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::NONE => Some("NONE"),
      Self::FileChmodRequest => Some("FileChmodRequest"),
      Self::FileCloseRequest => Some("FileCloseRequest"),
      Self::FileOpenRequest => Some("FileOpenRequest"),
      Self::FileReadRequest => Some("FileReadRequest"),
      Self::FileSeekRequest => Some("FileSeekRequest"),
      Self::FileStatRequest => Some("FileStatRequest"),
      Self::FileWriteRequest => Some("FileWriteRequest"),
      Self::FileSELinuxGetLabelRequest => Some("FileSELinuxGetLabelRequest"),
      Self::FileSELinuxSetLabelRequest => Some("FileSELinuxSetLabelRequest"),
      Self::PathChmodRequest => Some("PathChmodRequest"),
      Self::PathCopyRequest => Some("PathCopyRequest"),
      Self::PathSELinuxGetLabelRequest => Some("PathSELinuxGetLabelRequest"),
      Self::PathSELinuxSetLabelRequest => Some("PathSELinuxSetLabelRequest"),
      Self::PathGetDirectorySizeRequest => Some("PathGetDirectorySizeRequest"),
      Self::SignedExecRequest => Some("SignedExecRequest"),
      Self::MbGetVersionRequest => Some("MbGetVersionRequest"),
      Self::MbGetInstalledRomsRequest => Some("MbGetInstalledRomsRequest"),
      Self::MbGetBootedRomIdRequest => Some("MbGetBootedRomIdRequest"),
      Self::MbSwitchRomRequest => Some("MbSwitchRomRequest"),
      Self::MbSetKernelRequest => Some("MbSetKernelRequest"),
      Self::RebootRequest => Some("RebootRequest"),
      Self::MbWipeRomRequest => Some("MbWipeRomRequest"),
      Self::MbGetPackagesCountRequest => Some("MbGetPackagesCountRequest"),
      Self::PathDeleteRequest => Some("PathDeleteRequest"),
      Self::PathMkdirRequest => Some("PathMkdirRequest"),
      Self::PathReadlinkRequest => Some("PathReadlinkRequest"),
      Self::ShutdownRequest => Some("ShutdownRequest"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for RequestType {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for RequestType {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<u8>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for RequestType {
    type Output = RequestType;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<u8>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for RequestType {
  type Scalar = u8;
  #[inline]
  fn to_little_endian(self) -> u8 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: u8) -> Self {
    let b = u8::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for RequestType {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    u8::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for RequestType {}
pub struct RequestTypeUnionTableOffset {}

pub enum RequestOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Request<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Request<'a> {
  type Inner = Request<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> Request<'a> {
  pub const VT_REQUEST_TYPE: flatbuffers::VOffsetT = 4;
  pub const VT_REQUEST: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Request { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args RequestArgs
  ) -> flatbuffers::WIPOffset<Request<'bldr>> {
    let mut builder = RequestBuilder::new(_fbb);
    if let Some(x) = args.request { builder.add_request(x); }
    builder.add_request_type(args.request_type);
    builder.finish()
  }


  #[inline]
  pub fn request_type(&self) -> RequestType {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<RequestType>(Request::VT_REQUEST_TYPE, Some(RequestType::NONE)).unwrap()}
  }
  #[inline]
  pub fn request(&self) -> Option<flatbuffers::Table<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(Request::VT_REQUEST, None)}
  }
  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_chmod_request(&self) -> Option<FileChmodRequest<'a>> {
    if self.request_type() == RequestType::FileChmodRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileChmodRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_close_request(&self) -> Option<FileCloseRequest<'a>> {
    if self.request_type() == RequestType::FileCloseRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileCloseRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_open_request(&self) -> Option<FileOpenRequest<'a>> {
    if self.request_type() == RequestType::FileOpenRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileOpenRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_read_request(&self) -> Option<FileReadRequest<'a>> {
    if self.request_type() == RequestType::FileReadRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileReadRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_seek_request(&self) -> Option<FileSeekRequest<'a>> {
    if self.request_type() == RequestType::FileSeekRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileSeekRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_stat_request(&self) -> Option<FileStatRequest<'a>> {
    if self.request_type() == RequestType::FileStatRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileStatRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_write_request(&self) -> Option<FileWriteRequest<'a>> {
    if self.request_type() == RequestType::FileWriteRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileWriteRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_selinux_get_label_request(&self) -> Option<FileSELinuxGetLabelRequest<'a>> {
    if self.request_type() == RequestType::FileSELinuxGetLabelRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileSELinuxGetLabelRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_file_selinux_set_label_request(&self) -> Option<FileSELinuxSetLabelRequest<'a>> {
    if self.request_type() == RequestType::FileSELinuxSetLabelRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileSELinuxSetLabelRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_chmod_request(&self) -> Option<PathChmodRequest<'a>> {
    if self.request_type() == RequestType::PathChmodRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathChmodRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_copy_request(&self) -> Option<PathCopyRequest<'a>> {
    if self.request_type() == RequestType::PathCopyRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathCopyRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_selinux_get_label_request(&self) -> Option<PathSELinuxGetLabelRequest<'a>> {
    if self.request_type() == RequestType::PathSELinuxGetLabelRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathSELinuxGetLabelRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_selinux_set_label_request(&self) -> Option<PathSELinuxSetLabelRequest<'a>> {
    if self.request_type() == RequestType::PathSELinuxSetLabelRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathSELinuxSetLabelRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_get_directory_size_request(&self) -> Option<PathGetDirectorySizeRequest<'a>> {
    if self.request_type() == RequestType::PathGetDirectorySizeRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathGetDirectorySizeRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_signed_exec_request(&self) -> Option<SignedExecRequest<'a>> {
    if self.request_type() == RequestType::SignedExecRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { SignedExecRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_get_version_request(&self) -> Option<MbGetVersionRequest<'a>> {
    if self.request_type() == RequestType::MbGetVersionRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetVersionRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_get_installed_roms_request(&self) -> Option<MbGetInstalledRomsRequest<'a>> {
    if self.request_type() == RequestType::MbGetInstalledRomsRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetInstalledRomsRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_get_booted_rom_id_request(&self) -> Option<MbGetBootedRomIdRequest<'a>> {
    if self.request_type() == RequestType::MbGetBootedRomIdRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetBootedRomIdRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_switch_rom_request(&self) -> Option<MbSwitchRomRequest<'a>> {
    if self.request_type() == RequestType::MbSwitchRomRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbSwitchRomRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_set_kernel_request(&self) -> Option<MbSetKernelRequest<'a>> {
    if self.request_type() == RequestType::MbSetKernelRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbSetKernelRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_reboot_request(&self) -> Option<RebootRequest<'a>> {
    if self.request_type() == RequestType::RebootRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { RebootRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_wipe_rom_request(&self) -> Option<MbWipeRomRequest<'a>> {
    if self.request_type() == RequestType::MbWipeRomRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbWipeRomRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_mb_get_packages_count_request(&self) -> Option<MbGetPackagesCountRequest<'a>> {
    if self.request_type() == RequestType::MbGetPackagesCountRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetPackagesCountRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_delete_request(&self) -> Option<PathDeleteRequest<'a>> {
    if self.request_type() == RequestType::PathDeleteRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathDeleteRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_mkdir_request(&self) -> Option<PathMkdirRequest<'a>> {
    if self.request_type() == RequestType::PathMkdirRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathMkdirRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_path_readlink_request(&self) -> Option<PathReadlinkRequest<'a>> {
    if self.request_type() == RequestType::PathReadlinkRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathReadlinkRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn request_as_shutdown_request(&self) -> Option<ShutdownRequest<'a>> {
    if self.request_type() == RequestType::ShutdownRequest {
      self.request().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { ShutdownRequest::init_from_table(t) }
     })
    } else {
      None
    }
  }

}

impl flatbuffers::Verifiable for Request<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_union::<RequestType, _>("request_type", Self::VT_REQUEST_TYPE, "request", Self::VT_REQUEST, false, |key, v, pos| {
        match key {
          RequestType::FileChmodRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileChmodRequest>>("RequestType::FileChmodRequest", pos),
          RequestType::FileCloseRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileCloseRequest>>("RequestType::FileCloseRequest", pos),
          RequestType::FileOpenRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileOpenRequest>>("RequestType::FileOpenRequest", pos),
          RequestType::FileReadRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileReadRequest>>("RequestType::FileReadRequest", pos),
          RequestType::FileSeekRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileSeekRequest>>("RequestType::FileSeekRequest", pos),
          RequestType::FileStatRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileStatRequest>>("RequestType::FileStatRequest", pos),
          RequestType::FileWriteRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileWriteRequest>>("RequestType::FileWriteRequest", pos),
          RequestType::FileSELinuxGetLabelRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileSELinuxGetLabelRequest>>("RequestType::FileSELinuxGetLabelRequest", pos),
          RequestType::FileSELinuxSetLabelRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileSELinuxSetLabelRequest>>("RequestType::FileSELinuxSetLabelRequest", pos),
          RequestType::PathChmodRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathChmodRequest>>("RequestType::PathChmodRequest", pos),
          RequestType::PathCopyRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathCopyRequest>>("RequestType::PathCopyRequest", pos),
          RequestType::PathSELinuxGetLabelRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathSELinuxGetLabelRequest>>("RequestType::PathSELinuxGetLabelRequest", pos),
          RequestType::PathSELinuxSetLabelRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathSELinuxSetLabelRequest>>("RequestType::PathSELinuxSetLabelRequest", pos),
          RequestType::PathGetDirectorySizeRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathGetDirectorySizeRequest>>("RequestType::PathGetDirectorySizeRequest", pos),
          RequestType::SignedExecRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<SignedExecRequest>>("RequestType::SignedExecRequest", pos),
          RequestType::MbGetVersionRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetVersionRequest>>("RequestType::MbGetVersionRequest", pos),
          RequestType::MbGetInstalledRomsRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetInstalledRomsRequest>>("RequestType::MbGetInstalledRomsRequest", pos),
          RequestType::MbGetBootedRomIdRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetBootedRomIdRequest>>("RequestType::MbGetBootedRomIdRequest", pos),
          RequestType::MbSwitchRomRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbSwitchRomRequest>>("RequestType::MbSwitchRomRequest", pos),
          RequestType::MbSetKernelRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbSetKernelRequest>>("RequestType::MbSetKernelRequest", pos),
          RequestType::RebootRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<RebootRequest>>("RequestType::RebootRequest", pos),
          RequestType::MbWipeRomRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbWipeRomRequest>>("RequestType::MbWipeRomRequest", pos),
          RequestType::MbGetPackagesCountRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetPackagesCountRequest>>("RequestType::MbGetPackagesCountRequest", pos),
          RequestType::PathDeleteRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathDeleteRequest>>("RequestType::PathDeleteRequest", pos),
          RequestType::PathMkdirRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathMkdirRequest>>("RequestType::PathMkdirRequest", pos),
          RequestType::PathReadlinkRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathReadlinkRequest>>("RequestType::PathReadlinkRequest", pos),
          RequestType::ShutdownRequest => v.verify_union_variant::<flatbuffers::ForwardsUOffset<ShutdownRequest>>("RequestType::ShutdownRequest", pos),
          _ => Ok(()),
        }
     })?
     .finish();
    Ok(())
  }
}
pub struct RequestArgs {
    pub request_type: RequestType,
    pub request: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
}
impl Default for RequestArgs {
  #[inline]
  fn default() -> Self {
    RequestArgs {
      request_type: RequestType::NONE,
      request: None,
    }
  }
}

pub struct RequestBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RequestBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_request_type(&mut self, request_type: RequestType) {
    self.fbb_.push_slot::<RequestType>(Request::VT_REQUEST_TYPE, request_type, RequestType::NONE);
  }
  #[inline]
  pub fn add_request(&mut self, request: flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Request::VT_REQUEST, request);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> RequestBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    RequestBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Request<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Request<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Request");
      ds.field("request_type", &self.request_type());
      match self.request_type() {
        RequestType::FileChmodRequest => {
          if let Some(x) = self.request_as_file_chmod_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileCloseRequest => {
          if let Some(x) = self.request_as_file_close_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileOpenRequest => {
          if let Some(x) = self.request_as_file_open_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileReadRequest => {
          if let Some(x) = self.request_as_file_read_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileSeekRequest => {
          if let Some(x) = self.request_as_file_seek_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileStatRequest => {
          if let Some(x) = self.request_as_file_stat_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileWriteRequest => {
          if let Some(x) = self.request_as_file_write_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileSELinuxGetLabelRequest => {
          if let Some(x) = self.request_as_file_selinux_get_label_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::FileSELinuxSetLabelRequest => {
          if let Some(x) = self.request_as_file_selinux_set_label_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathChmodRequest => {
          if let Some(x) = self.request_as_path_chmod_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathCopyRequest => {
          if let Some(x) = self.request_as_path_copy_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathSELinuxGetLabelRequest => {
          if let Some(x) = self.request_as_path_selinux_get_label_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathSELinuxSetLabelRequest => {
          if let Some(x) = self.request_as_path_selinux_set_label_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathGetDirectorySizeRequest => {
          if let Some(x) = self.request_as_path_get_directory_size_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::SignedExecRequest => {
          if let Some(x) = self.request_as_signed_exec_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbGetVersionRequest => {
          if let Some(x) = self.request_as_mb_get_version_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbGetInstalledRomsRequest => {
          if let Some(x) = self.request_as_mb_get_installed_roms_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbGetBootedRomIdRequest => {
          if let Some(x) = self.request_as_mb_get_booted_rom_id_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbSwitchRomRequest => {
          if let Some(x) = self.request_as_mb_switch_rom_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbSetKernelRequest => {
          if let Some(x) = self.request_as_mb_set_kernel_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::RebootRequest => {
          if let Some(x) = self.request_as_reboot_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbWipeRomRequest => {
          if let Some(x) = self.request_as_mb_wipe_rom_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::MbGetPackagesCountRequest => {
          if let Some(x) = self.request_as_mb_get_packages_count_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathDeleteRequest => {
          if let Some(x) = self.request_as_path_delete_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathMkdirRequest => {
          if let Some(x) = self.request_as_path_mkdir_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::PathReadlinkRequest => {
          if let Some(x) = self.request_as_path_readlink_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        RequestType::ShutdownRequest => {
          if let Some(x) = self.request_as_shutdown_request() {
            ds.field("request", &x)
          } else {
            ds.field("request", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        _ => {
          let x: Option<()> = None;
          ds.field("request", &x)
        },
      };
      ds.finish()
  }
}
pub enum UnsupportedOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Unsupported<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Unsupported<'a> {
  type Inner = Unsupported<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> Unsupported<'a> {
  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Unsupported { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    _args: &'args UnsupportedArgs
  ) -> flatbuffers::WIPOffset<Unsupported<'bldr>> {
    let mut builder = UnsupportedBuilder::new(_fbb);
    builder.finish()
  }


}

impl flatbuffers::Verifiable for Unsupported<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .finish();
    Ok(())
  }
}
pub struct UnsupportedArgs {
}
impl<'a> Default for UnsupportedArgs {
  #[inline]
  fn default() -> Self {
    UnsupportedArgs {
    }
  }
}

pub struct UnsupportedBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> UnsupportedBuilder<'a, 'b, A> {
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> UnsupportedBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    UnsupportedBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Unsupported<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Unsupported<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Unsupported");
      ds.finish()
  }
}
pub enum InvalidOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Invalid<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Invalid<'a> {
  type Inner = Invalid<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> Invalid<'a> {
  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Invalid { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    _args: &'args InvalidArgs
  ) -> flatbuffers::WIPOffset<Invalid<'bldr>> {
    let mut builder = InvalidBuilder::new(_fbb);
    builder.finish()
  }


}

impl flatbuffers::Verifiable for Invalid<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .finish();
    Ok(())
  }
}
pub struct InvalidArgs {
}
impl<'a> Default for InvalidArgs {
  #[inline]
  fn default() -> Self {
    InvalidArgs {
    }
  }
}

pub struct InvalidBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> InvalidBuilder<'a, 'b, A> {
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> InvalidBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    InvalidBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Invalid<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Invalid<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Invalid");
      ds.finish()
  }
}
pub enum FileChmodResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileChmodResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileChmodResponse<'a> {
  type Inner = FileChmodResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileChmodResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileChmodResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileChmodResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileChmodResponse<'bldr>> {
    let mut builder = FileChmodResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileChmodResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for FileChmodResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct FileChmodResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
}
impl<'a> Default for FileChmodResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileChmodResponseArgs {
      error: None,
    }
  }
}

pub struct FileChmodResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileChmodResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileChmodResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileChmodResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileChmodResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileChmodResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileChmodResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileChmodResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum FileCloseResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileCloseResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileCloseResponse<'a> {
  type Inner = FileCloseResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileCloseResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileCloseResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileCloseResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileCloseResponse<'bldr>> {
    let mut builder = FileCloseResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileCloseResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for FileCloseResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct FileCloseResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
}
impl<'a> Default for FileCloseResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileCloseResponseArgs {
      error: None,
    }
  }
}

pub struct FileCloseResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileCloseResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileCloseResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileCloseResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileCloseResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileCloseResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileCloseResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileCloseResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum FileOpenResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileOpenResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileOpenResponse<'a> {
  type Inner = FileOpenResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileOpenResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_ID: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileOpenResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileOpenResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileOpenResponse<'bldr>> {
    let mut builder = FileOpenResponseBuilder::new(_fbb);
    builder.add_id(args.id);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileOpenResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn id(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(FileOpenResponse::VT_ID, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileOpenResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .visit_field::<i32>("id", Self::VT_ID, false)?
     .finish();
    Ok(())
  }
}
pub struct FileOpenResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
    pub id: i32,
}
impl<'a> Default for FileOpenResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileOpenResponseArgs {
      error: None,
      id: 0,
    }
  }
}

pub struct FileOpenResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileOpenResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileOpenResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_id(&mut self, id: i32) {
    self.fbb_.push_slot::<i32>(FileOpenResponse::VT_ID, id, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileOpenResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileOpenResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileOpenResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileOpenResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileOpenResponse");
      ds.field("error", &self.error());
      ds.field("id", &self.id());
      ds.finish()
  }
}
pub enum FileReadResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileReadResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileReadResponse<'a> {
  type Inner = FileReadResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileReadResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_BYTES_READ: flatbuffers::VOffsetT = 6;
  pub const VT_DATA: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileReadResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileReadResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileReadResponse<'bldr>> {
    let mut builder = FileReadResponseBuilder::new(_fbb);
    builder.add_bytes_read(args.bytes_read);
    if let Some(x) = args.data { builder.add_data(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileReadResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn bytes_read(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(FileReadResponse::VT_BYTES_READ, Some(0)).unwrap()}
  }
  #[inline]
  pub fn data(&self) -> Option<flatbuffers::Vector<'a, u8>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, u8>>>(FileReadResponse::VT_DATA, None)}
  }
}

impl flatbuffers::Verifiable for FileReadResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .visit_field::<u64>("bytes_read", Self::VT_BYTES_READ, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, u8>>>("data", Self::VT_DATA, false)?
     .finish();
    Ok(())
  }
}
pub struct FileReadResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
    pub bytes_read: u64,
    pub data: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, u8>>>,
}
impl<'a> Default for FileReadResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileReadResponseArgs {
      error: None,
      bytes_read: 0,
      data: None,
    }
  }
}

pub struct FileReadResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileReadResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileReadResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_bytes_read(&mut self, bytes_read: u64) {
    self.fbb_.push_slot::<u64>(FileReadResponse::VT_BYTES_READ, bytes_read, 0);
  }
  #[inline]
  pub fn add_data(&mut self, data: flatbuffers::WIPOffset<flatbuffers::Vector<'b , u8>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileReadResponse::VT_DATA, data);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileReadResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileReadResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileReadResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileReadResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileReadResponse");
      ds.field("error", &self.error());
      ds.field("bytes_read", &self.bytes_read());
      ds.field("data", &self.data());
      ds.finish()
  }
}
pub enum FileSeekResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileSeekResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileSeekResponse<'a> {
  type Inner = FileSeekResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileSeekResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_OFFSET: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileSeekResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileSeekResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileSeekResponse<'bldr>> {
    let mut builder = FileSeekResponseBuilder::new(_fbb);
    builder.add_offset(args.offset);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileSeekResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn offset(&self) -> i64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i64>(FileSeekResponse::VT_OFFSET, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileSeekResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .visit_field::<i64>("offset", Self::VT_OFFSET, false)?
     .finish();
    Ok(())
  }
}
pub struct FileSeekResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
    pub offset: i64,
}
impl<'a> Default for FileSeekResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileSeekResponseArgs {
      error: None,
      offset: 0,
    }
  }
}

pub struct FileSeekResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileSeekResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileSeekResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_offset(&mut self, offset: i64) {
    self.fbb_.push_slot::<i64>(FileSeekResponse::VT_OFFSET, offset, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileSeekResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileSeekResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileSeekResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileSeekResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileSeekResponse");
      ds.field("error", &self.error());
      ds.field("offset", &self.offset());
      ds.finish()
  }
}
pub enum FileStatResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileStatResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileStatResponse<'a> {
  type Inner = FileStatResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileStatResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_STAT: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileStatResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileStatResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileStatResponse<'bldr>> {
    let mut builder = FileStatResponseBuilder::new(_fbb);
    if let Some(x) = args.stat { builder.add_stat(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileStatResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn stat(&self) -> Option<StructStat<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<StructStat>>(FileStatResponse::VT_STAT, None)}
  }
}

impl flatbuffers::Verifiable for FileStatResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<StructStat>>("stat", Self::VT_STAT, false)?
     .finish();
    Ok(())
  }
}
pub struct FileStatResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
    pub stat: Option<flatbuffers::WIPOffset<StructStat<'a>>>,
}
impl<'a> Default for FileStatResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileStatResponseArgs {
      error: None,
      stat: None,
    }
  }
}

pub struct FileStatResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileStatResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileStatResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_stat(&mut self, stat: flatbuffers::WIPOffset<StructStat<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<StructStat>>(FileStatResponse::VT_STAT, stat);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileStatResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileStatResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileStatResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileStatResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileStatResponse");
      ds.field("error", &self.error());
      ds.field("stat", &self.stat());
      ds.finish()
  }
}
pub enum FileWriteResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileWriteResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileWriteResponse<'a> {
  type Inner = FileWriteResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileWriteResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_BYTES_WRITTEN: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileWriteResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileWriteResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileWriteResponse<'bldr>> {
    let mut builder = FileWriteResponseBuilder::new(_fbb);
    builder.add_bytes_written(args.bytes_written);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileWriteResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn bytes_written(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(FileWriteResponse::VT_BYTES_WRITTEN, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for FileWriteResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .visit_field::<u64>("bytes_written", Self::VT_BYTES_WRITTEN, false)?
     .finish();
    Ok(())
  }
}
pub struct FileWriteResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
    pub bytes_written: u64,
}
impl<'a> Default for FileWriteResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileWriteResponseArgs {
      error: None,
      bytes_written: 0,
    }
  }
}

pub struct FileWriteResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileWriteResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileWriteResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_bytes_written(&mut self, bytes_written: u64) {
    self.fbb_.push_slot::<u64>(FileWriteResponse::VT_BYTES_WRITTEN, bytes_written, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileWriteResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileWriteResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileWriteResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileWriteResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileWriteResponse");
      ds.field("error", &self.error());
      ds.field("bytes_written", &self.bytes_written());
      ds.finish()
  }
}
pub enum FileSELinuxGetLabelResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileSELinuxGetLabelResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileSELinuxGetLabelResponse<'a> {
  type Inner = FileSELinuxGetLabelResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileSELinuxGetLabelResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_LABEL: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileSELinuxGetLabelResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileSELinuxGetLabelResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileSELinuxGetLabelResponse<'bldr>> {
    let mut builder = FileSELinuxGetLabelResponseBuilder::new(_fbb);
    if let Some(x) = args.label { builder.add_label(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileSELinuxGetLabelResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn label(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(FileSELinuxGetLabelResponse::VT_LABEL, None)}
  }
}

impl flatbuffers::Verifiable for FileSELinuxGetLabelResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("label", Self::VT_LABEL, false)?
     .finish();
    Ok(())
  }
}
pub struct FileSELinuxGetLabelResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
    pub label: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for FileSELinuxGetLabelResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileSELinuxGetLabelResponseArgs {
      error: None,
      label: None,
    }
  }
}

pub struct FileSELinuxGetLabelResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileSELinuxGetLabelResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileSELinuxGetLabelResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_label(&mut self, label: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(FileSELinuxGetLabelResponse::VT_LABEL, label);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileSELinuxGetLabelResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileSELinuxGetLabelResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileSELinuxGetLabelResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileSELinuxGetLabelResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileSELinuxGetLabelResponse");
      ds.field("error", &self.error());
      ds.field("label", &self.label());
      ds.finish()
  }
}
pub enum FileSELinuxSetLabelResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct FileSELinuxSetLabelResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for FileSELinuxSetLabelResponse<'a> {
  type Inner = FileSELinuxSetLabelResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> FileSELinuxSetLabelResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    FileSELinuxSetLabelResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args FileSELinuxSetLabelResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<FileSELinuxSetLabelResponse<'bldr>> {
    let mut builder = FileSELinuxSetLabelResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<FileError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<FileError>>(FileSELinuxSetLabelResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for FileSELinuxSetLabelResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<FileError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct FileSELinuxSetLabelResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<FileError<'a>>>,
}
impl<'a> Default for FileSELinuxSetLabelResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    FileSELinuxSetLabelResponseArgs {
      error: None,
    }
  }
}

pub struct FileSELinuxSetLabelResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> FileSELinuxSetLabelResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<FileError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<FileError>>(FileSELinuxSetLabelResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> FileSELinuxSetLabelResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    FileSELinuxSetLabelResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<FileSELinuxSetLabelResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for FileSELinuxSetLabelResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("FileSELinuxSetLabelResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum PathChmodResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathChmodResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathChmodResponse<'a> {
  type Inner = PathChmodResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathChmodResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathChmodResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathChmodResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathChmodResponse<'bldr>> {
    let mut builder = PathChmodResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathChmodResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for PathChmodResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct PathChmodResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
}
impl<'a> Default for PathChmodResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathChmodResponseArgs {
      error: None,
    }
  }
}

pub struct PathChmodResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathChmodResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathChmodResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathChmodResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathChmodResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathChmodResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathChmodResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathChmodResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum PathCopyResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathCopyResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathCopyResponse<'a> {
  type Inner = PathCopyResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathCopyResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathCopyResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathCopyResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathCopyResponse<'bldr>> {
    let mut builder = PathCopyResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathCopyResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for PathCopyResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct PathCopyResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
}
impl<'a> Default for PathCopyResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathCopyResponseArgs {
      error: None,
    }
  }
}

pub struct PathCopyResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathCopyResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathCopyResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathCopyResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathCopyResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathCopyResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathCopyResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathCopyResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum PathSELinuxGetLabelResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathSELinuxGetLabelResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathSELinuxGetLabelResponse<'a> {
  type Inner = PathSELinuxGetLabelResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathSELinuxGetLabelResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_LABEL: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathSELinuxGetLabelResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathSELinuxGetLabelResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathSELinuxGetLabelResponse<'bldr>> {
    let mut builder = PathSELinuxGetLabelResponseBuilder::new(_fbb);
    if let Some(x) = args.label { builder.add_label(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathSELinuxGetLabelResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn label(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathSELinuxGetLabelResponse::VT_LABEL, None)}
  }
}

impl flatbuffers::Verifiable for PathSELinuxGetLabelResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("label", Self::VT_LABEL, false)?
     .finish();
    Ok(())
  }
}
pub struct PathSELinuxGetLabelResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
    pub label: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for PathSELinuxGetLabelResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathSELinuxGetLabelResponseArgs {
      error: None,
      label: None,
    }
  }
}

pub struct PathSELinuxGetLabelResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathSELinuxGetLabelResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathSELinuxGetLabelResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_label(&mut self, label: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathSELinuxGetLabelResponse::VT_LABEL, label);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathSELinuxGetLabelResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathSELinuxGetLabelResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathSELinuxGetLabelResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathSELinuxGetLabelResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathSELinuxGetLabelResponse");
      ds.field("error", &self.error());
      ds.field("label", &self.label());
      ds.finish()
  }
}
pub enum PathSELinuxSetLabelResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathSELinuxSetLabelResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathSELinuxSetLabelResponse<'a> {
  type Inner = PathSELinuxSetLabelResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathSELinuxSetLabelResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathSELinuxSetLabelResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathSELinuxSetLabelResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathSELinuxSetLabelResponse<'bldr>> {
    let mut builder = PathSELinuxSetLabelResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathSELinuxSetLabelResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for PathSELinuxSetLabelResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct PathSELinuxSetLabelResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
}
impl<'a> Default for PathSELinuxSetLabelResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathSELinuxSetLabelResponseArgs {
      error: None,
    }
  }
}

pub struct PathSELinuxSetLabelResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathSELinuxSetLabelResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathSELinuxSetLabelResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathSELinuxSetLabelResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathSELinuxSetLabelResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathSELinuxSetLabelResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathSELinuxSetLabelResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathSELinuxSetLabelResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum PathGetDirectorySizeResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathGetDirectorySizeResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathGetDirectorySizeResponse<'a> {
  type Inner = PathGetDirectorySizeResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathGetDirectorySizeResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_SIZE: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathGetDirectorySizeResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathGetDirectorySizeResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathGetDirectorySizeResponse<'bldr>> {
    let mut builder = PathGetDirectorySizeResponseBuilder::new(_fbb);
    builder.add_size(args.size);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathGetDirectorySizeResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn size(&self) -> u64 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u64>(PathGetDirectorySizeResponse::VT_SIZE, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for PathGetDirectorySizeResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .visit_field::<u64>("size", Self::VT_SIZE, false)?
     .finish();
    Ok(())
  }
}
pub struct PathGetDirectorySizeResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
    pub size: u64,
}
impl<'a> Default for PathGetDirectorySizeResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathGetDirectorySizeResponseArgs {
      error: None,
      size: 0,
    }
  }
}

pub struct PathGetDirectorySizeResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathGetDirectorySizeResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathGetDirectorySizeResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_size(&mut self, size: u64) {
    self.fbb_.push_slot::<u64>(PathGetDirectorySizeResponse::VT_SIZE, size, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathGetDirectorySizeResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathGetDirectorySizeResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathGetDirectorySizeResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathGetDirectorySizeResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathGetDirectorySizeResponse");
      ds.field("error", &self.error());
      ds.field("size", &self.size());
      ds.finish()
  }
}
pub enum PathDeleteResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathDeleteResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathDeleteResponse<'a> {
  type Inner = PathDeleteResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathDeleteResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathDeleteResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathDeleteResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathDeleteResponse<'bldr>> {
    let mut builder = PathDeleteResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathDeleteResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for PathDeleteResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct PathDeleteResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
}
impl<'a> Default for PathDeleteResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathDeleteResponseArgs {
      error: None,
    }
  }
}

pub struct PathDeleteResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathDeleteResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathDeleteResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathDeleteResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathDeleteResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathDeleteResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathDeleteResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathDeleteResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum PathMkdirResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathMkdirResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathMkdirResponse<'a> {
  type Inner = PathMkdirResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathMkdirResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathMkdirResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathMkdirResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathMkdirResponse<'bldr>> {
    let mut builder = PathMkdirResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathMkdirResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for PathMkdirResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct PathMkdirResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
}
impl<'a> Default for PathMkdirResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathMkdirResponseArgs {
      error: None,
    }
  }
}

pub struct PathMkdirResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathMkdirResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathMkdirResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathMkdirResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathMkdirResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathMkdirResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathMkdirResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathMkdirResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum PathReadlinkResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct PathReadlinkResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for PathReadlinkResponse<'a> {
  type Inner = PathReadlinkResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> PathReadlinkResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_TARGET: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    PathReadlinkResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args PathReadlinkResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<PathReadlinkResponse<'bldr>> {
    let mut builder = PathReadlinkResponseBuilder::new(_fbb);
    if let Some(x) = args.target { builder.add_target(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<PathError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<PathError>>(PathReadlinkResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn target(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(PathReadlinkResponse::VT_TARGET, None)}
  }
}

impl flatbuffers::Verifiable for PathReadlinkResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<PathError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("target", Self::VT_TARGET, false)?
     .finish();
    Ok(())
  }
}
pub struct PathReadlinkResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<PathError<'a>>>,
    pub target: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for PathReadlinkResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    PathReadlinkResponseArgs {
      error: None,
      target: None,
    }
  }
}

pub struct PathReadlinkResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> PathReadlinkResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<PathError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<PathError>>(PathReadlinkResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_target(&mut self, target: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(PathReadlinkResponse::VT_TARGET, target);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> PathReadlinkResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    PathReadlinkResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<PathReadlinkResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for PathReadlinkResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("PathReadlinkResponse");
      ds.field("error", &self.error());
      ds.field("target", &self.target());
      ds.finish()
  }
}
pub enum SignedExecOutputResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct SignedExecOutputResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SignedExecOutputResponse<'a> {
  type Inner = SignedExecOutputResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> SignedExecOutputResponse<'a> {
  pub const VT_LINE: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    SignedExecOutputResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args SignedExecOutputResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<SignedExecOutputResponse<'bldr>> {
    let mut builder = SignedExecOutputResponseBuilder::new(_fbb);
    if let Some(x) = args.line { builder.add_line(x); }
    builder.finish()
  }


  #[inline]
  pub fn line(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SignedExecOutputResponse::VT_LINE, None)}
  }
}

impl flatbuffers::Verifiable for SignedExecOutputResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("line", Self::VT_LINE, false)?
     .finish();
    Ok(())
  }
}
pub struct SignedExecOutputResponseArgs<'a> {
    pub line: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for SignedExecOutputResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    SignedExecOutputResponseArgs {
      line: None,
    }
  }
}

pub struct SignedExecOutputResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> SignedExecOutputResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_line(&mut self, line: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecOutputResponse::VT_LINE, line);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> SignedExecOutputResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    SignedExecOutputResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<SignedExecOutputResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for SignedExecOutputResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("SignedExecOutputResponse");
      ds.field("line", &self.line());
      ds.finish()
  }
}
pub enum SignedExecResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct SignedExecResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for SignedExecResponse<'a> {
  type Inner = SignedExecResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> SignedExecResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_RESULT: flatbuffers::VOffsetT = 6;
  pub const VT_EXIT_STATUS: flatbuffers::VOffsetT = 8;
  pub const VT_TERM_SIG: flatbuffers::VOffsetT = 10;
  pub const VT_ERROR_MSG: flatbuffers::VOffsetT = 12;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    SignedExecResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args SignedExecResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<SignedExecResponse<'bldr>> {
    let mut builder = SignedExecResponseBuilder::new(_fbb);
    if let Some(x) = args.error_msg { builder.add_error_msg(x); }
    builder.add_term_sig(args.term_sig);
    builder.add_exit_status(args.exit_status);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.add_result(args.result);
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<SignedExecError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<SignedExecError>>(SignedExecResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn result(&self) -> SignedExecResult {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<SignedExecResult>(SignedExecResponse::VT_RESULT, Some(SignedExecResult::PROCESS_EXITED)).unwrap()}
  }
  #[inline]
  pub fn exit_status(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(SignedExecResponse::VT_EXIT_STATUS, Some(0)).unwrap()}
  }
  #[inline]
  pub fn term_sig(&self) -> i32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<i32>(SignedExecResponse::VT_TERM_SIG, Some(0)).unwrap()}
  }
  #[inline]
  pub fn error_msg(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(SignedExecResponse::VT_ERROR_MSG, None)}
  }
}

impl flatbuffers::Verifiable for SignedExecResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<SignedExecError>>("error", Self::VT_ERROR, false)?
     .visit_field::<SignedExecResult>("result", Self::VT_RESULT, false)?
     .visit_field::<i32>("exit_status", Self::VT_EXIT_STATUS, false)?
     .visit_field::<i32>("term_sig", Self::VT_TERM_SIG, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("error_msg", Self::VT_ERROR_MSG, false)?
     .finish();
    Ok(())
  }
}
pub struct SignedExecResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<SignedExecError<'a>>>,
    pub result: SignedExecResult,
    pub exit_status: i32,
    pub term_sig: i32,
    pub error_msg: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for SignedExecResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    SignedExecResponseArgs {
      error: None,
      result: SignedExecResult::PROCESS_EXITED,
      exit_status: 0,
      term_sig: 0,
      error_msg: None,
    }
  }
}

pub struct SignedExecResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> SignedExecResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<SignedExecError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<SignedExecError>>(SignedExecResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_result(&mut self, result: SignedExecResult) {
    self.fbb_.push_slot::<SignedExecResult>(SignedExecResponse::VT_RESULT, result, SignedExecResult::PROCESS_EXITED);
  }
  #[inline]
  pub fn add_exit_status(&mut self, exit_status: i32) {
    self.fbb_.push_slot::<i32>(SignedExecResponse::VT_EXIT_STATUS, exit_status, 0);
  }
  #[inline]
  pub fn add_term_sig(&mut self, term_sig: i32) {
    self.fbb_.push_slot::<i32>(SignedExecResponse::VT_TERM_SIG, term_sig, 0);
  }
  #[inline]
  pub fn add_error_msg(&mut self, error_msg: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(SignedExecResponse::VT_ERROR_MSG, error_msg);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> SignedExecResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    SignedExecResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<SignedExecResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for SignedExecResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("SignedExecResponse");
      ds.field("error", &self.error());
      ds.field("result", &self.result());
      ds.field("exit_status", &self.exit_status());
      ds.field("term_sig", &self.term_sig());
      ds.field("error_msg", &self.error_msg());
      ds.finish()
  }
}
pub enum MbGetVersionResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetVersionResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetVersionResponse<'a> {
  type Inner = MbGetVersionResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetVersionResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_VERSION: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetVersionResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbGetVersionResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbGetVersionResponse<'bldr>> {
    let mut builder = MbGetVersionResponseBuilder::new(_fbb);
    if let Some(x) = args.version { builder.add_version(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbGetVersionResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn version(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbGetVersionResponse::VT_VERSION, None)}
  }
}

impl flatbuffers::Verifiable for MbGetVersionResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("version", Self::VT_VERSION, false)?
     .finish();
    Ok(())
  }
}
pub struct MbGetVersionResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub version: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for MbGetVersionResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbGetVersionResponseArgs {
      error: None,
      version: None,
    }
  }
}

pub struct MbGetVersionResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetVersionResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbGetVersionResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_version(&mut self, version: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbGetVersionResponse::VT_VERSION, version);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetVersionResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetVersionResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetVersionResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetVersionResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetVersionResponse");
      ds.field("error", &self.error());
      ds.field("version", &self.version());
      ds.finish()
  }
}
pub enum MbGetInstalledRomsResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetInstalledRomsResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetInstalledRomsResponse<'a> {
  type Inner = MbGetInstalledRomsResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetInstalledRomsResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_ROMS: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetInstalledRomsResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbGetInstalledRomsResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbGetInstalledRomsResponse<'bldr>> {
    let mut builder = MbGetInstalledRomsResponseBuilder::new(_fbb);
    if let Some(x) = args.roms { builder.add_roms(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbGetInstalledRomsResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn roms(&self) -> Option<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<MbRom<'a>>>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<MbRom>>>>(MbGetInstalledRomsResponse::VT_ROMS, None)}
  }
}

impl flatbuffers::Verifiable for MbGetInstalledRomsResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, flatbuffers::ForwardsUOffset<MbRom>>>>("roms", Self::VT_ROMS, false)?
     .finish();
    Ok(())
  }
}
pub struct MbGetInstalledRomsResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub roms: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, flatbuffers::ForwardsUOffset<MbRom<'a>>>>>,
}
impl<'a> Default for MbGetInstalledRomsResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbGetInstalledRomsResponseArgs {
      error: None,
      roms: None,
    }
  }
}

pub struct MbGetInstalledRomsResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetInstalledRomsResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbGetInstalledRomsResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_roms(&mut self, roms: flatbuffers::WIPOffset<flatbuffers::Vector<'b , flatbuffers::ForwardsUOffset<MbRom<'b >>>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbGetInstalledRomsResponse::VT_ROMS, roms);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetInstalledRomsResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetInstalledRomsResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetInstalledRomsResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetInstalledRomsResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetInstalledRomsResponse");
      ds.field("error", &self.error());
      ds.field("roms", &self.roms());
      ds.finish()
  }
}
pub enum MbGetBootedRomIdResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetBootedRomIdResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetBootedRomIdResponse<'a> {
  type Inner = MbGetBootedRomIdResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetBootedRomIdResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_ROM_ID: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetBootedRomIdResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbGetBootedRomIdResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbGetBootedRomIdResponse<'bldr>> {
    let mut builder = MbGetBootedRomIdResponseBuilder::new(_fbb);
    if let Some(x) = args.rom_id { builder.add_rom_id(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbGetBootedRomIdResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn rom_id(&self) -> Option<&'a str> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<&str>>(MbGetBootedRomIdResponse::VT_ROM_ID, None)}
  }
}

impl flatbuffers::Verifiable for MbGetBootedRomIdResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<&str>>("rom_id", Self::VT_ROM_ID, false)?
     .finish();
    Ok(())
  }
}
pub struct MbGetBootedRomIdResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub rom_id: Option<flatbuffers::WIPOffset<&'a str>>,
}
impl<'a> Default for MbGetBootedRomIdResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbGetBootedRomIdResponseArgs {
      error: None,
      rom_id: None,
    }
  }
}

pub struct MbGetBootedRomIdResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetBootedRomIdResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbGetBootedRomIdResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_rom_id(&mut self, rom_id: flatbuffers::WIPOffset<&'b  str>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbGetBootedRomIdResponse::VT_ROM_ID, rom_id);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetBootedRomIdResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetBootedRomIdResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetBootedRomIdResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetBootedRomIdResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetBootedRomIdResponse");
      ds.field("error", &self.error());
      ds.field("rom_id", &self.rom_id());
      ds.finish()
  }
}
pub enum MbSwitchRomResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbSwitchRomResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbSwitchRomResponse<'a> {
  type Inner = MbSwitchRomResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbSwitchRomResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_RESULT: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbSwitchRomResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbSwitchRomResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbSwitchRomResponse<'bldr>> {
    let mut builder = MbSwitchRomResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.add_result(args.result);
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbSwitchRomResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn result(&self) -> MbSwitchRomResult {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<MbSwitchRomResult>(MbSwitchRomResponse::VT_RESULT, Some(MbSwitchRomResult::SUCCEEDED)).unwrap()}
  }
}

impl flatbuffers::Verifiable for MbSwitchRomResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<MbSwitchRomResult>("result", Self::VT_RESULT, false)?
     .finish();
    Ok(())
  }
}
pub struct MbSwitchRomResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub result: MbSwitchRomResult,
}
impl<'a> Default for MbSwitchRomResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbSwitchRomResponseArgs {
      error: None,
      result: MbSwitchRomResult::SUCCEEDED,
    }
  }
}

pub struct MbSwitchRomResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbSwitchRomResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbSwitchRomResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_result(&mut self, result: MbSwitchRomResult) {
    self.fbb_.push_slot::<MbSwitchRomResult>(MbSwitchRomResponse::VT_RESULT, result, MbSwitchRomResult::SUCCEEDED);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbSwitchRomResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbSwitchRomResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbSwitchRomResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbSwitchRomResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbSwitchRomResponse");
      ds.field("error", &self.error());
      ds.field("result", &self.result());
      ds.finish()
  }
}
pub enum MbSetKernelResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbSetKernelResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbSetKernelResponse<'a> {
  type Inner = MbSetKernelResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbSetKernelResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_SUCCESS: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbSetKernelResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbSetKernelResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbSetKernelResponse<'bldr>> {
    let mut builder = MbSetKernelResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.add_success(args.success);
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbSetKernelResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn success(&self) -> bool {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<bool>(MbSetKernelResponse::VT_SUCCESS, Some(false)).unwrap()}
  }
}

impl flatbuffers::Verifiable for MbSetKernelResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<bool>("success", Self::VT_SUCCESS, false)?
     .finish();
    Ok(())
  }
}
pub struct MbSetKernelResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub success: bool,
}
impl<'a> Default for MbSetKernelResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbSetKernelResponseArgs {
      error: None,
      success: false,
    }
  }
}

pub struct MbSetKernelResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbSetKernelResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbSetKernelResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_success(&mut self, success: bool) {
    self.fbb_.push_slot::<bool>(MbSetKernelResponse::VT_SUCCESS, success, false);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbSetKernelResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbSetKernelResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbSetKernelResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbSetKernelResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbSetKernelResponse");
      ds.field("error", &self.error());
      ds.field("success", &self.success());
      ds.finish()
  }
}
pub enum MbWipeRomResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbWipeRomResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbWipeRomResponse<'a> {
  type Inner = MbWipeRomResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbWipeRomResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_SUCCEEDED: flatbuffers::VOffsetT = 6;
  pub const VT_FAILED: flatbuffers::VOffsetT = 8;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbWipeRomResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbWipeRomResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbWipeRomResponse<'bldr>> {
    let mut builder = MbWipeRomResponseBuilder::new(_fbb);
    if let Some(x) = args.failed { builder.add_failed(x); }
    if let Some(x) = args.succeeded { builder.add_succeeded(x); }
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbWipeRomResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn succeeded(&self) -> Option<flatbuffers::Vector<'a, i16>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i16>>>(MbWipeRomResponse::VT_SUCCEEDED, None)}
  }
  #[inline]
  pub fn failed(&self) -> Option<flatbuffers::Vector<'a, i16>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'a, i16>>>(MbWipeRomResponse::VT_FAILED, None)}
  }
}

impl flatbuffers::Verifiable for MbWipeRomResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i16>>>("succeeded", Self::VT_SUCCEEDED, false)?
     .visit_field::<flatbuffers::ForwardsUOffset<flatbuffers::Vector<'_, i16>>>("failed", Self::VT_FAILED, false)?
     .finish();
    Ok(())
  }
}
pub struct MbWipeRomResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub succeeded: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i16>>>,
    pub failed: Option<flatbuffers::WIPOffset<flatbuffers::Vector<'a, i16>>>,
}
impl<'a> Default for MbWipeRomResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbWipeRomResponseArgs {
      error: None,
      succeeded: None,
      failed: None,
    }
  }
}

pub struct MbWipeRomResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbWipeRomResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbWipeRomResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_succeeded(&mut self, succeeded: flatbuffers::WIPOffset<flatbuffers::Vector<'b , i16>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbWipeRomResponse::VT_SUCCEEDED, succeeded);
  }
  #[inline]
  pub fn add_failed(&mut self, failed: flatbuffers::WIPOffset<flatbuffers::Vector<'b , i16>>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(MbWipeRomResponse::VT_FAILED, failed);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbWipeRomResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbWipeRomResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbWipeRomResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbWipeRomResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbWipeRomResponse");
      ds.field("error", &self.error());
      ds.field("succeeded", &self.succeeded());
      ds.field("failed", &self.failed());
      ds.finish()
  }
}
pub enum MbGetPackagesCountResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct MbGetPackagesCountResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for MbGetPackagesCountResponse<'a> {
  type Inner = MbGetPackagesCountResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> MbGetPackagesCountResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;
  pub const VT_SYSTEM_PACKAGES: flatbuffers::VOffsetT = 6;
  pub const VT_SYSTEM_UPDATE_PACKAGES: flatbuffers::VOffsetT = 8;
  pub const VT_NON_SYSTEM_PACKAGES: flatbuffers::VOffsetT = 10;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    MbGetPackagesCountResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args MbGetPackagesCountResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<MbGetPackagesCountResponse<'bldr>> {
    let mut builder = MbGetPackagesCountResponseBuilder::new(_fbb);
    builder.add_non_system_packages(args.non_system_packages);
    builder.add_system_update_packages(args.system_update_packages);
    builder.add_system_packages(args.system_packages);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<MbError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<MbError>>(MbGetPackagesCountResponse::VT_ERROR, None)}
  }
  #[inline]
  pub fn system_packages(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(MbGetPackagesCountResponse::VT_SYSTEM_PACKAGES, Some(0)).unwrap()}
  }
  #[inline]
  pub fn system_update_packages(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(MbGetPackagesCountResponse::VT_SYSTEM_UPDATE_PACKAGES, Some(0)).unwrap()}
  }
  #[inline]
  pub fn non_system_packages(&self) -> u32 {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<u32>(MbGetPackagesCountResponse::VT_NON_SYSTEM_PACKAGES, Some(0)).unwrap()}
  }
}

impl flatbuffers::Verifiable for MbGetPackagesCountResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<MbError>>("error", Self::VT_ERROR, false)?
     .visit_field::<u32>("system_packages", Self::VT_SYSTEM_PACKAGES, false)?
     .visit_field::<u32>("system_update_packages", Self::VT_SYSTEM_UPDATE_PACKAGES, false)?
     .visit_field::<u32>("non_system_packages", Self::VT_NON_SYSTEM_PACKAGES, false)?
     .finish();
    Ok(())
  }
}
pub struct MbGetPackagesCountResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<MbError<'a>>>,
    pub system_packages: u32,
    pub system_update_packages: u32,
    pub non_system_packages: u32,
}
impl<'a> Default for MbGetPackagesCountResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    MbGetPackagesCountResponseArgs {
      error: None,
      system_packages: 0,
      system_update_packages: 0,
      non_system_packages: 0,
    }
  }
}

pub struct MbGetPackagesCountResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> MbGetPackagesCountResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<MbError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<MbError>>(MbGetPackagesCountResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn add_system_packages(&mut self, system_packages: u32) {
    self.fbb_.push_slot::<u32>(MbGetPackagesCountResponse::VT_SYSTEM_PACKAGES, system_packages, 0);
  }
  #[inline]
  pub fn add_system_update_packages(&mut self, system_update_packages: u32) {
    self.fbb_.push_slot::<u32>(MbGetPackagesCountResponse::VT_SYSTEM_UPDATE_PACKAGES, system_update_packages, 0);
  }
  #[inline]
  pub fn add_non_system_packages(&mut self, non_system_packages: u32) {
    self.fbb_.push_slot::<u32>(MbGetPackagesCountResponse::VT_NON_SYSTEM_PACKAGES, non_system_packages, 0);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> MbGetPackagesCountResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    MbGetPackagesCountResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<MbGetPackagesCountResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for MbGetPackagesCountResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("MbGetPackagesCountResponse");
      ds.field("error", &self.error());
      ds.field("system_packages", &self.system_packages());
      ds.field("system_update_packages", &self.system_update_packages());
      ds.field("non_system_packages", &self.non_system_packages());
      ds.finish()
  }
}
pub enum RebootResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct RebootResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for RebootResponse<'a> {
  type Inner = RebootResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> RebootResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    RebootResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args RebootResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<RebootResponse<'bldr>> {
    let mut builder = RebootResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<SystemError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<SystemError>>(RebootResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for RebootResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<SystemError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct RebootResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<SystemError<'a>>>,
}
impl<'a> Default for RebootResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    RebootResponseArgs {
      error: None,
    }
  }
}

pub struct RebootResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> RebootResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<SystemError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<SystemError>>(RebootResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> RebootResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    RebootResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<RebootResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for RebootResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("RebootResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
pub enum ShutdownResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct ShutdownResponse<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for ShutdownResponse<'a> {
  type Inner = ShutdownResponse<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> ShutdownResponse<'a> {
  pub const VT_ERROR: flatbuffers::VOffsetT = 4;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    ShutdownResponse { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args ShutdownResponseArgs<'args>
  ) -> flatbuffers::WIPOffset<ShutdownResponse<'bldr>> {
    let mut builder = ShutdownResponseBuilder::new(_fbb);
    if let Some(x) = args.error { builder.add_error(x); }
    builder.finish()
  }


  #[inline]
  pub fn error(&self) -> Option<SystemError<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<SystemError>>(ShutdownResponse::VT_ERROR, None)}
  }
}

impl flatbuffers::Verifiable for ShutdownResponse<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_field::<flatbuffers::ForwardsUOffset<SystemError>>("error", Self::VT_ERROR, false)?
     .finish();
    Ok(())
  }
}
pub struct ShutdownResponseArgs<'a> {
    pub error: Option<flatbuffers::WIPOffset<SystemError<'a>>>,
}
impl<'a> Default for ShutdownResponseArgs<'a> {
  #[inline]
  fn default() -> Self {
    ShutdownResponseArgs {
      error: None,
    }
  }
}

pub struct ShutdownResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ShutdownResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_error(&mut self, error: flatbuffers::WIPOffset<SystemError<'b >>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<SystemError>>(ShutdownResponse::VT_ERROR, error);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> ShutdownResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    ShutdownResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<ShutdownResponse<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for ShutdownResponse<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("ShutdownResponse");
      ds.field("error", &self.error());
      ds.finish()
  }
}
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MIN_RESPONSE_TYPE: u8 = 0;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
pub const ENUM_MAX_RESPONSE_TYPE: u8 = 30;
#[deprecated(since = "2.0.0", note = "Use associated constants instead. This will no longer be generated in 2021.")]
#[allow(non_camel_case_types)]
pub const ENUM_VALUES_RESPONSE_TYPE: [ResponseType; 31] = [
  ResponseType::NONE,
  ResponseType::Unsupported,
  ResponseType::Invalid,
  ResponseType::FileChmodResponse,
  ResponseType::FileCloseResponse,
  ResponseType::FileOpenResponse,
  ResponseType::FileReadResponse,
  ResponseType::FileSeekResponse,
  ResponseType::FileStatResponse,
  ResponseType::FileWriteResponse,
  ResponseType::FileSELinuxGetLabelResponse,
  ResponseType::FileSELinuxSetLabelResponse,
  ResponseType::PathChmodResponse,
  ResponseType::PathCopyResponse,
  ResponseType::PathSELinuxGetLabelResponse,
  ResponseType::PathSELinuxSetLabelResponse,
  ResponseType::PathGetDirectorySizeResponse,
  ResponseType::SignedExecOutputResponse,
  ResponseType::SignedExecResponse,
  ResponseType::MbGetVersionResponse,
  ResponseType::MbGetInstalledRomsResponse,
  ResponseType::MbGetBootedRomIdResponse,
  ResponseType::MbSwitchRomResponse,
  ResponseType::MbSetKernelResponse,
  ResponseType::RebootResponse,
  ResponseType::MbWipeRomResponse,
  ResponseType::MbGetPackagesCountResponse,
  ResponseType::PathDeleteResponse,
  ResponseType::PathMkdirResponse,
  ResponseType::PathReadlinkResponse,
  ResponseType::ShutdownResponse,
];

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ResponseType(pub u8);
#[allow(non_upper_case_globals)]
impl ResponseType {
  pub const NONE: Self = Self(0);
  pub const Unsupported: Self = Self(1);
  pub const Invalid: Self = Self(2);
  pub const FileChmodResponse: Self = Self(3);
  pub const FileCloseResponse: Self = Self(4);
  pub const FileOpenResponse: Self = Self(5);
  pub const FileReadResponse: Self = Self(6);
  pub const FileSeekResponse: Self = Self(7);
  pub const FileStatResponse: Self = Self(8);
  pub const FileWriteResponse: Self = Self(9);
  pub const FileSELinuxGetLabelResponse: Self = Self(10);
  pub const FileSELinuxSetLabelResponse: Self = Self(11);
  pub const PathChmodResponse: Self = Self(12);
  pub const PathCopyResponse: Self = Self(13);
  pub const PathSELinuxGetLabelResponse: Self = Self(14);
  pub const PathSELinuxSetLabelResponse: Self = Self(15);
  pub const PathGetDirectorySizeResponse: Self = Self(16);
  pub const SignedExecOutputResponse: Self = Self(17);
  pub const SignedExecResponse: Self = Self(18);
  pub const MbGetVersionResponse: Self = Self(19);
  pub const MbGetInstalledRomsResponse: Self = Self(20);
  pub const MbGetBootedRomIdResponse: Self = Self(21);
  pub const MbSwitchRomResponse: Self = Self(22);
  pub const MbSetKernelResponse: Self = Self(23);
  pub const RebootResponse: Self = Self(24);
  pub const MbWipeRomResponse: Self = Self(25);
  pub const MbGetPackagesCountResponse: Self = Self(26);
  pub const PathDeleteResponse: Self = Self(27);
  pub const PathMkdirResponse: Self = Self(28);
  pub const PathReadlinkResponse: Self = Self(29);
  pub const ShutdownResponse: Self = Self(30);

  pub const ENUM_MIN: u8 = 0;
  pub const ENUM_MAX: u8 = 30;
  pub const ENUM_VALUES: &'static [Self] = &[
    Self::NONE,
    Self::Unsupported,
    Self::Invalid,
    Self::FileChmodResponse,
    Self::FileCloseResponse,
    Self::FileOpenResponse,
    Self::FileReadResponse,
    Self::FileSeekResponse,
    Self::FileStatResponse,
    Self::FileWriteResponse,
    Self::FileSELinuxGetLabelResponse,
    Self::FileSELinuxSetLabelResponse,
    Self::PathChmodResponse,
    Self::PathCopyResponse,
    Self::PathSELinuxGetLabelResponse,
    Self::PathSELinuxSetLabelResponse,
    Self::PathGetDirectorySizeResponse,
    Self::SignedExecOutputResponse,
    Self::SignedExecResponse,
    Self::MbGetVersionResponse,
    Self::MbGetInstalledRomsResponse,
    Self::MbGetBootedRomIdResponse,
    Self::MbSwitchRomResponse,
    Self::MbSetKernelResponse,
    Self::RebootResponse,
    Self::MbWipeRomResponse,
    Self::MbGetPackagesCountResponse,
    Self::PathDeleteResponse,
    Self::PathMkdirResponse,
    Self::PathReadlinkResponse,
    Self::ShutdownResponse,
  ];
  /// Returns the variant's name or "" if unknown.
  pub fn variant_name(self) -> Option<&'static str> {
    match self {
      Self::NONE => Some("NONE"),
      Self::Unsupported => Some("Unsupported"),
      Self::Invalid => Some("Invalid"),
      Self::FileChmodResponse => Some("FileChmodResponse"),
      Self::FileCloseResponse => Some("FileCloseResponse"),
      Self::FileOpenResponse => Some("FileOpenResponse"),
      Self::FileReadResponse => Some("FileReadResponse"),
      Self::FileSeekResponse => Some("FileSeekResponse"),
      Self::FileStatResponse => Some("FileStatResponse"),
      Self::FileWriteResponse => Some("FileWriteResponse"),
      Self::FileSELinuxGetLabelResponse => Some("FileSELinuxGetLabelResponse"),
      Self::FileSELinuxSetLabelResponse => Some("FileSELinuxSetLabelResponse"),
      Self::PathChmodResponse => Some("PathChmodResponse"),
      Self::PathCopyResponse => Some("PathCopyResponse"),
      Self::PathSELinuxGetLabelResponse => Some("PathSELinuxGetLabelResponse"),
      Self::PathSELinuxSetLabelResponse => Some("PathSELinuxSetLabelResponse"),
      Self::PathGetDirectorySizeResponse => Some("PathGetDirectorySizeResponse"),
      Self::SignedExecOutputResponse => Some("SignedExecOutputResponse"),
      Self::SignedExecResponse => Some("SignedExecResponse"),
      Self::MbGetVersionResponse => Some("MbGetVersionResponse"),
      Self::MbGetInstalledRomsResponse => Some("MbGetInstalledRomsResponse"),
      Self::MbGetBootedRomIdResponse => Some("MbGetBootedRomIdResponse"),
      Self::MbSwitchRomResponse => Some("MbSwitchRomResponse"),
      Self::MbSetKernelResponse => Some("MbSetKernelResponse"),
      Self::RebootResponse => Some("RebootResponse"),
      Self::MbWipeRomResponse => Some("MbWipeRomResponse"),
      Self::MbGetPackagesCountResponse => Some("MbGetPackagesCountResponse"),
      Self::PathDeleteResponse => Some("PathDeleteResponse"),
      Self::PathMkdirResponse => Some("PathMkdirResponse"),
      Self::PathReadlinkResponse => Some("PathReadlinkResponse"),
      Self::ShutdownResponse => Some("ShutdownResponse"),
      _ => None,
    }
  }
}
impl core::fmt::Debug for ResponseType {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    if let Some(name) = self.variant_name() {
      f.write_str(name)
    } else {
      f.write_fmt(format_args!("<UNKNOWN {:?}>", self.0))
    }
  }
}
impl<'a> flatbuffers::Follow<'a> for ResponseType {
  type Inner = Self;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    let b = unsafe { flatbuffers::read_scalar_at::<u8>(buf, loc) };
    Self(b)
  }
}

impl flatbuffers::Push for ResponseType {
    type Output = ResponseType;
    #[inline]
    unsafe fn push(&self, dst: &mut [u8], _written_len: usize) {
        unsafe { flatbuffers::emplace_scalar::<u8>(dst, self.0) };
    }
}

impl flatbuffers::EndianScalar for ResponseType {
  type Scalar = u8;
  #[inline]
  fn to_little_endian(self) -> u8 {
    self.0.to_le()
  }
  #[inline]
  #[allow(clippy::wrong_self_convention)]
  fn from_little_endian(v: u8) -> Self {
    let b = u8::from_le(v);
    Self(b)
  }
}

impl<'a> flatbuffers::Verifiable for ResponseType {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    u8::run_verifier(v, pos)
  }
}

impl flatbuffers::SimpleToVerifyInSlice for ResponseType {}
pub struct ResponseTypeUnionTableOffset {}

pub enum ResponseOffset {}
#[derive(Copy, Clone, PartialEq)]

pub struct Response<'a> {
  pub _tab: flatbuffers::Table<'a>,
}

impl<'a> flatbuffers::Follow<'a> for Response<'a> {
  type Inner = Response<'a>;
  #[inline]
  unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
    Self { _tab: unsafe { flatbuffers::Table::new(buf, loc) } }
  }
}

impl<'a> Response<'a> {
  pub const VT_RESPONSE_TYPE: flatbuffers::VOffsetT = 4;
  pub const VT_RESPONSE: flatbuffers::VOffsetT = 6;

  #[inline]
  pub unsafe fn init_from_table(table: flatbuffers::Table<'a>) -> Self {
    Response { _tab: table }
  }
  #[allow(unused_mut)]
  pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr, A: flatbuffers::Allocator + 'bldr>(
    _fbb: &'mut_bldr mut flatbuffers::FlatBufferBuilder<'bldr, A>,
    args: &'args ResponseArgs
  ) -> flatbuffers::WIPOffset<Response<'bldr>> {
    let mut builder = ResponseBuilder::new(_fbb);
    if let Some(x) = args.response { builder.add_response(x); }
    builder.add_response_type(args.response_type);
    builder.finish()
  }


  #[inline]
  pub fn response_type(&self) -> ResponseType {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<ResponseType>(Response::VT_RESPONSE_TYPE, Some(ResponseType::NONE)).unwrap()}
  }
  #[inline]
  pub fn response(&self) -> Option<flatbuffers::Table<'a>> {
    // Safety:
    // Created from valid Table for this object
    // which contains a valid value in this slot
    unsafe { self._tab.get::<flatbuffers::ForwardsUOffset<flatbuffers::Table<'a>>>(Response::VT_RESPONSE, None)}
  }
  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_unsupported(&self) -> Option<Unsupported<'a>> {
    if self.response_type() == ResponseType::Unsupported {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { Unsupported::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_invalid(&self) -> Option<Invalid<'a>> {
    if self.response_type() == ResponseType::Invalid {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { Invalid::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_chmod_response(&self) -> Option<FileChmodResponse<'a>> {
    if self.response_type() == ResponseType::FileChmodResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileChmodResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_close_response(&self) -> Option<FileCloseResponse<'a>> {
    if self.response_type() == ResponseType::FileCloseResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileCloseResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_open_response(&self) -> Option<FileOpenResponse<'a>> {
    if self.response_type() == ResponseType::FileOpenResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileOpenResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_read_response(&self) -> Option<FileReadResponse<'a>> {
    if self.response_type() == ResponseType::FileReadResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileReadResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_seek_response(&self) -> Option<FileSeekResponse<'a>> {
    if self.response_type() == ResponseType::FileSeekResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileSeekResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_stat_response(&self) -> Option<FileStatResponse<'a>> {
    if self.response_type() == ResponseType::FileStatResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileStatResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_write_response(&self) -> Option<FileWriteResponse<'a>> {
    if self.response_type() == ResponseType::FileWriteResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileWriteResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_selinux_get_label_response(&self) -> Option<FileSELinuxGetLabelResponse<'a>> {
    if self.response_type() == ResponseType::FileSELinuxGetLabelResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileSELinuxGetLabelResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_file_selinux_set_label_response(&self) -> Option<FileSELinuxSetLabelResponse<'a>> {
    if self.response_type() == ResponseType::FileSELinuxSetLabelResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { FileSELinuxSetLabelResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_chmod_response(&self) -> Option<PathChmodResponse<'a>> {
    if self.response_type() == ResponseType::PathChmodResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathChmodResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_copy_response(&self) -> Option<PathCopyResponse<'a>> {
    if self.response_type() == ResponseType::PathCopyResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathCopyResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_selinux_get_label_response(&self) -> Option<PathSELinuxGetLabelResponse<'a>> {
    if self.response_type() == ResponseType::PathSELinuxGetLabelResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathSELinuxGetLabelResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_selinux_set_label_response(&self) -> Option<PathSELinuxSetLabelResponse<'a>> {
    if self.response_type() == ResponseType::PathSELinuxSetLabelResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathSELinuxSetLabelResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_get_directory_size_response(&self) -> Option<PathGetDirectorySizeResponse<'a>> {
    if self.response_type() == ResponseType::PathGetDirectorySizeResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathGetDirectorySizeResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_signed_exec_output_response(&self) -> Option<SignedExecOutputResponse<'a>> {
    if self.response_type() == ResponseType::SignedExecOutputResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { SignedExecOutputResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_signed_exec_response(&self) -> Option<SignedExecResponse<'a>> {
    if self.response_type() == ResponseType::SignedExecResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { SignedExecResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_get_version_response(&self) -> Option<MbGetVersionResponse<'a>> {
    if self.response_type() == ResponseType::MbGetVersionResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetVersionResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_get_installed_roms_response(&self) -> Option<MbGetInstalledRomsResponse<'a>> {
    if self.response_type() == ResponseType::MbGetInstalledRomsResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetInstalledRomsResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_get_booted_rom_id_response(&self) -> Option<MbGetBootedRomIdResponse<'a>> {
    if self.response_type() == ResponseType::MbGetBootedRomIdResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetBootedRomIdResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_switch_rom_response(&self) -> Option<MbSwitchRomResponse<'a>> {
    if self.response_type() == ResponseType::MbSwitchRomResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbSwitchRomResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_set_kernel_response(&self) -> Option<MbSetKernelResponse<'a>> {
    if self.response_type() == ResponseType::MbSetKernelResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbSetKernelResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_reboot_response(&self) -> Option<RebootResponse<'a>> {
    if self.response_type() == ResponseType::RebootResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { RebootResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_wipe_rom_response(&self) -> Option<MbWipeRomResponse<'a>> {
    if self.response_type() == ResponseType::MbWipeRomResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbWipeRomResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_mb_get_packages_count_response(&self) -> Option<MbGetPackagesCountResponse<'a>> {
    if self.response_type() == ResponseType::MbGetPackagesCountResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { MbGetPackagesCountResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_delete_response(&self) -> Option<PathDeleteResponse<'a>> {
    if self.response_type() == ResponseType::PathDeleteResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathDeleteResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_mkdir_response(&self) -> Option<PathMkdirResponse<'a>> {
    if self.response_type() == ResponseType::PathMkdirResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathMkdirResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_path_readlink_response(&self) -> Option<PathReadlinkResponse<'a>> {
    if self.response_type() == ResponseType::PathReadlinkResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { PathReadlinkResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

  #[inline]
  #[allow(non_snake_case)]
  pub fn response_as_shutdown_response(&self) -> Option<ShutdownResponse<'a>> {
    if self.response_type() == ResponseType::ShutdownResponse {
      self.response().map(|t| {
       // Safety:
       // Created from a valid Table for this object
       // Which contains a valid union in this slot
       unsafe { ShutdownResponse::init_from_table(t) }
     })
    } else {
      None
    }
  }

}

impl flatbuffers::Verifiable for Response<'_> {
  #[inline]
  fn run_verifier(
    v: &mut flatbuffers::Verifier, pos: usize
  ) -> Result<(), flatbuffers::InvalidFlatbuffer> {
    use self::flatbuffers::Verifiable;
    v.visit_table(pos)?
     .visit_union::<ResponseType, _>("response_type", Self::VT_RESPONSE_TYPE, "response", Self::VT_RESPONSE, false, |key, v, pos| {
        match key {
          ResponseType::Unsupported => v.verify_union_variant::<flatbuffers::ForwardsUOffset<Unsupported>>("ResponseType::Unsupported", pos),
          ResponseType::Invalid => v.verify_union_variant::<flatbuffers::ForwardsUOffset<Invalid>>("ResponseType::Invalid", pos),
          ResponseType::FileChmodResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileChmodResponse>>("ResponseType::FileChmodResponse", pos),
          ResponseType::FileCloseResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileCloseResponse>>("ResponseType::FileCloseResponse", pos),
          ResponseType::FileOpenResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileOpenResponse>>("ResponseType::FileOpenResponse", pos),
          ResponseType::FileReadResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileReadResponse>>("ResponseType::FileReadResponse", pos),
          ResponseType::FileSeekResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileSeekResponse>>("ResponseType::FileSeekResponse", pos),
          ResponseType::FileStatResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileStatResponse>>("ResponseType::FileStatResponse", pos),
          ResponseType::FileWriteResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileWriteResponse>>("ResponseType::FileWriteResponse", pos),
          ResponseType::FileSELinuxGetLabelResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileSELinuxGetLabelResponse>>("ResponseType::FileSELinuxGetLabelResponse", pos),
          ResponseType::FileSELinuxSetLabelResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<FileSELinuxSetLabelResponse>>("ResponseType::FileSELinuxSetLabelResponse", pos),
          ResponseType::PathChmodResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathChmodResponse>>("ResponseType::PathChmodResponse", pos),
          ResponseType::PathCopyResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathCopyResponse>>("ResponseType::PathCopyResponse", pos),
          ResponseType::PathSELinuxGetLabelResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathSELinuxGetLabelResponse>>("ResponseType::PathSELinuxGetLabelResponse", pos),
          ResponseType::PathSELinuxSetLabelResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathSELinuxSetLabelResponse>>("ResponseType::PathSELinuxSetLabelResponse", pos),
          ResponseType::PathGetDirectorySizeResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathGetDirectorySizeResponse>>("ResponseType::PathGetDirectorySizeResponse", pos),
          ResponseType::SignedExecOutputResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<SignedExecOutputResponse>>("ResponseType::SignedExecOutputResponse", pos),
          ResponseType::SignedExecResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<SignedExecResponse>>("ResponseType::SignedExecResponse", pos),
          ResponseType::MbGetVersionResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetVersionResponse>>("ResponseType::MbGetVersionResponse", pos),
          ResponseType::MbGetInstalledRomsResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetInstalledRomsResponse>>("ResponseType::MbGetInstalledRomsResponse", pos),
          ResponseType::MbGetBootedRomIdResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetBootedRomIdResponse>>("ResponseType::MbGetBootedRomIdResponse", pos),
          ResponseType::MbSwitchRomResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbSwitchRomResponse>>("ResponseType::MbSwitchRomResponse", pos),
          ResponseType::MbSetKernelResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbSetKernelResponse>>("ResponseType::MbSetKernelResponse", pos),
          ResponseType::RebootResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<RebootResponse>>("ResponseType::RebootResponse", pos),
          ResponseType::MbWipeRomResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbWipeRomResponse>>("ResponseType::MbWipeRomResponse", pos),
          ResponseType::MbGetPackagesCountResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<MbGetPackagesCountResponse>>("ResponseType::MbGetPackagesCountResponse", pos),
          ResponseType::PathDeleteResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathDeleteResponse>>("ResponseType::PathDeleteResponse", pos),
          ResponseType::PathMkdirResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathMkdirResponse>>("ResponseType::PathMkdirResponse", pos),
          ResponseType::PathReadlinkResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<PathReadlinkResponse>>("ResponseType::PathReadlinkResponse", pos),
          ResponseType::ShutdownResponse => v.verify_union_variant::<flatbuffers::ForwardsUOffset<ShutdownResponse>>("ResponseType::ShutdownResponse", pos),
          _ => Ok(()),
        }
     })?
     .finish();
    Ok(())
  }
}
pub struct ResponseArgs {
    pub response_type: ResponseType,
    pub response: Option<flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>>,
}
impl Default for ResponseArgs {
  #[inline]
  fn default() -> Self {
    ResponseArgs {
      response_type: ResponseType::NONE,
      response: None,
    }
  }
}

pub struct ResponseBuilder<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> {
  fbb_: &'b mut flatbuffers::FlatBufferBuilder<'a, A>,
  start_: flatbuffers::WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}
impl<'a: 'b, 'b, A: flatbuffers::Allocator + 'a> ResponseBuilder<'a, 'b, A> {
  #[inline]
  pub fn add_response_type(&mut self, response_type: ResponseType) {
    self.fbb_.push_slot::<ResponseType>(Response::VT_RESPONSE_TYPE, response_type, ResponseType::NONE);
  }
  #[inline]
  pub fn add_response(&mut self, response: flatbuffers::WIPOffset<flatbuffers::UnionWIPOffset>) {
    self.fbb_.push_slot_always::<flatbuffers::WIPOffset<_>>(Response::VT_RESPONSE, response);
  }
  #[inline]
  pub fn new(_fbb: &'b mut flatbuffers::FlatBufferBuilder<'a, A>) -> ResponseBuilder<'a, 'b, A> {
    let start = _fbb.start_table();
    ResponseBuilder {
      fbb_: _fbb,
      start_: start,
    }
  }
  #[inline]
  pub fn finish(self) -> flatbuffers::WIPOffset<Response<'a>> {
    let o = self.fbb_.end_table(self.start_);
    flatbuffers::WIPOffset::new(o.value())
  }
}

impl core::fmt::Debug for Response<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut ds = f.debug_struct("Response");
      ds.field("response_type", &self.response_type());
      match self.response_type() {
        ResponseType::Unsupported => {
          if let Some(x) = self.response_as_unsupported() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::Invalid => {
          if let Some(x) = self.response_as_invalid() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileChmodResponse => {
          if let Some(x) = self.response_as_file_chmod_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileCloseResponse => {
          if let Some(x) = self.response_as_file_close_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileOpenResponse => {
          if let Some(x) = self.response_as_file_open_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileReadResponse => {
          if let Some(x) = self.response_as_file_read_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileSeekResponse => {
          if let Some(x) = self.response_as_file_seek_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileStatResponse => {
          if let Some(x) = self.response_as_file_stat_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileWriteResponse => {
          if let Some(x) = self.response_as_file_write_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileSELinuxGetLabelResponse => {
          if let Some(x) = self.response_as_file_selinux_get_label_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::FileSELinuxSetLabelResponse => {
          if let Some(x) = self.response_as_file_selinux_set_label_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathChmodResponse => {
          if let Some(x) = self.response_as_path_chmod_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathCopyResponse => {
          if let Some(x) = self.response_as_path_copy_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathSELinuxGetLabelResponse => {
          if let Some(x) = self.response_as_path_selinux_get_label_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathSELinuxSetLabelResponse => {
          if let Some(x) = self.response_as_path_selinux_set_label_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathGetDirectorySizeResponse => {
          if let Some(x) = self.response_as_path_get_directory_size_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::SignedExecOutputResponse => {
          if let Some(x) = self.response_as_signed_exec_output_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::SignedExecResponse => {
          if let Some(x) = self.response_as_signed_exec_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbGetVersionResponse => {
          if let Some(x) = self.response_as_mb_get_version_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbGetInstalledRomsResponse => {
          if let Some(x) = self.response_as_mb_get_installed_roms_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbGetBootedRomIdResponse => {
          if let Some(x) = self.response_as_mb_get_booted_rom_id_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbSwitchRomResponse => {
          if let Some(x) = self.response_as_mb_switch_rom_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbSetKernelResponse => {
          if let Some(x) = self.response_as_mb_set_kernel_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::RebootResponse => {
          if let Some(x) = self.response_as_reboot_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbWipeRomResponse => {
          if let Some(x) = self.response_as_mb_wipe_rom_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::MbGetPackagesCountResponse => {
          if let Some(x) = self.response_as_mb_get_packages_count_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathDeleteResponse => {
          if let Some(x) = self.response_as_path_delete_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathMkdirResponse => {
          if let Some(x) = self.response_as_path_mkdir_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::PathReadlinkResponse => {
          if let Some(x) = self.response_as_path_readlink_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        ResponseType::ShutdownResponse => {
          if let Some(x) = self.response_as_shutdown_response() {
            ds.field("response", &x)
          } else {
            ds.field("response", &"InvalidFlatbuffer: Union discriminant does not match value.")
          }
        },
        _ => {
          let x: Option<()> = None;
          ds.field("response", &x)
        },
      };
      ds.finish()
  }
}
}  // pub mod v3

}  // pub mod daemon

}  // pub mod mbtool

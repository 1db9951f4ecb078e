//! ROM management, reboot/shutdown and the boot partition precondition.

use mbtool_client::{
    Error, FixedResolver, HandshakeError, MbSwitchRomResult, PackageCounts, RebootType, Reply,
    Request, Response, RomInfo, SetKernelResult, ShutdownType, SwitchRomResult, WipeResult,
    WipeTarget,
};

use crate::mock_daemon::client;

fn boot_found() -> FixedResolver {
    FixedResolver {
        device: Some("/dev/block/bootdevice/by-name/boot".into()),
        search_dirs: vec!["/dev/block/bootdevice/by-name".into()],
    }
}

// ── Boot partition precondition ───────────────────────────────

#[test]
fn switch_rom_without_boot_partition_writes_nothing() {
    let mut c = client([]);
    let result = c.switch_rom("dual", false, &FixedResolver::default()).unwrap();
    assert_eq!(result, SwitchRomResult::UnknownBootPartition);
    assert_eq!(c.transport().bytes_written(), 0);
}

#[test]
fn set_kernel_without_boot_partition_writes_nothing() {
    let mut c = client([]);
    let result = c.set_kernel("primary", &FixedResolver::default()).unwrap();
    assert_eq!(result, SetKernelResult::UnknownBootPartition);
    assert_eq!(c.transport().bytes_written(), 0);
}

#[test]
fn switch_rom_sends_resolved_device_and_search_dirs() {
    let mut c = client([Response::MbSwitchRom(Reply::Success(
        MbSwitchRomResult::ChecksumNotFound,
    ))]);
    let result = c.switch_rom("data-slot-1", true, &boot_found()).unwrap();
    assert_eq!(result, SwitchRomResult::ChecksumNotFound);
    assert_eq!(
        c.transport().requests(),
        vec![Request::MbSwitchRom {
            rom_id: "data-slot-1".into(),
            boot_blockdev: "/dev/block/bootdevice/by-name/boot".into(),
            blockdev_base_dirs: vec!["/dev/block/bootdevice/by-name".into()],
            force_update_checksums: true,
        }]
    );
}

#[test]
fn set_kernel_maps_success_flag() {
    let mut c = client([
        Response::MbSetKernel(Reply::Success(true)),
        Response::MbSetKernel(Reply::Success(false)),
    ]);
    assert_eq!(c.set_kernel("primary", &boot_found()).unwrap(), SetKernelResult::Succeeded);
    assert_eq!(c.set_kernel("primary", &boot_found()).unwrap(), SetKernelResult::Failed);

    let sent = Request::MbSetKernel {
        rom_id: "primary".into(),
        boot_blockdev: "/dev/block/bootdevice/by-name/boot".into(),
    };
    assert_eq!(c.transport().requests(), vec![sent.clone(), sent]);
}

// ── Queries ───────────────────────────────────────────────────

#[test]
fn installed_roms_and_booted_id() {
    let roms = vec![RomInfo {
        id: "primary".into(),
        system_path: "/system".into(),
        cache_path: "/cache".into(),
        data_path: "/data".into(),
        version: "7.1.2".into(),
        build: "NJH47F".into(),
    }];
    let mut c = client([
        Response::MbGetInstalledRoms(Reply::Success(roms.clone())),
        Response::MbGetBootedRomId(Reply::Success(Some("primary".into()))),
        Response::MbGetBootedRomId(Reply::Success(None)),
    ]);
    assert_eq!(c.get_installed_roms().unwrap(), roms);
    assert_eq!(c.get_booted_rom_id().unwrap().as_deref(), Some("primary"));
    assert_eq!(c.get_booted_rom_id().unwrap(), None);
}

#[test]
fn wipe_and_package_counts() {
    let wiped = WipeResult {
        succeeded: vec![WipeTarget::Cache, WipeTarget::DalvikCache],
        failed: vec![WipeTarget::Data],
    };
    let counts = PackageCounts {
        system_packages: 120,
        system_update_packages: 14,
        non_system_packages: 0,
    };
    let mut c = client([
        Response::MbWipeRom(Reply::Success(wiped.clone())),
        Response::MbGetPackagesCount(Reply::Success(counts)),
    ]);

    let targets = [WipeTarget::Cache, WipeTarget::DalvikCache, WipeTarget::Data];
    assert_eq!(c.wipe_rom("dual", &targets).unwrap(), wiped);
    assert_eq!(c.get_packages_counts("dual").unwrap(), counts);
    assert_eq!(
        c.transport().requests()[0],
        Request::MbWipeRom {
            rom_id: "dual".into(),
            targets: targets.to_vec(),
        }
    );
}

#[test]
fn require_version_rejects_old_daemon() {
    let mut c = client([
        Response::MbGetVersion(Reply::Success("9.1.0".into())),
        Response::MbGetVersion(Reply::Success("9.3.0.r10".into())),
    ]);
    assert!(matches!(
        c.require_version("9.2"),
        Err(Error::Handshake(HandshakeError::DaemonTooOld { .. }))
    ));
    assert_eq!(c.require_version("9.2").unwrap(), "9.3.0.r10");
}

// ── Reboot / shutdown ─────────────────────────────────────────

#[test]
fn reboot_and_shutdown_variants() {
    let mut c = client([
        Response::Reboot(Reply::Success(())),
        Response::Reboot(Reply::Success(())),
        Response::Reboot(Reply::Success(())),
        Response::Shutdown(Reply::Success(())),
        Response::Shutdown(Reply::Success(())),
    ]);
    c.reboot_via_framework(true).unwrap();
    c.reboot_via_init(Some("recovery")).unwrap();
    c.reboot_via_mbtool(None).unwrap();
    c.shutdown_via_init().unwrap();
    c.shutdown_via_mbtool().unwrap();

    assert_eq!(
        c.transport().requests(),
        vec![
            Request::Reboot {
                kind: RebootType::Framework,
                arg: None,
                confirm: true,
            },
            Request::Reboot {
                kind: RebootType::Init,
                arg: Some("recovery".into()),
                confirm: false,
            },
            Request::Reboot {
                kind: RebootType::Direct,
                arg: None,
                confirm: false,
            },
            Request::Shutdown {
                kind: ShutdownType::Init,
            },
            Request::Shutdown {
                kind: ShutdownType::Direct,
            },
        ]
    );
}

#[test]
fn failed_reboot_is_command_error() {
    let mut c = client([Response::Reboot(Reply::failure(1, "Operation not permitted"))]);
    let err = c.reboot_via_init(None).unwrap_err();
    assert_eq!(err.errno(), Some(1));
    assert!(!err.is_fatal());
}

//! Chassis inventory and environment, read from the MIB surface.
//!
//! Every read asks the device to skip objects it cannot report
//! (`ignoreError=true`), since the object set differs between models.

use crate::client::response::ApiResult;
use crate::command::MibQuery;
use crate::error::Result;
use crate::transport::Transport;

/// Chassis hardware, modules, power and PoE.
pub struct ChassisEndpoint<'a, T: Transport> {
    transport: &'a mut T,
}

impl<'a, T: Transport> ChassisEndpoint<'a, T> {
    pub(crate) fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }

    async fn query(&mut self, query: MibQuery, limit: u32) -> Result<ApiResult> {
        let request = query.limit(limit).ignore_error(true).into_request()?;
        self.transport.request(request).await
    }

    /// Chassis model, serial, status and temperature thresholds.
    pub async fn hardware_info(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new("chasChassisTable")
            .objects([
                "entPhysicalIndex",
                "entPhysicalModelName",
                "chasEntPhysPartNumber",
                "entPhysicalClass",
                "entPhysicalDescr",
                "entPhysicalHardwareRev",
                "entPhysicalSerialNum",
                "entPhysicalMfgName",
                "chasEntPhysAdminStatus",
                "chasEntPhysOperStatus",
                "chasNumberOfResets",
                "chasCPMAHardwareBoardTemp",
                "chasTempThreshold",
                "chasTempRange",
                "chasDangerTempThreshold",
            ])
            .function("chassisSlotArr_entPhysIndex")
            .object("entPhysicalIndex");
        self.query(query, limit).await
    }

    /// Current readings and thresholds of every temperature sensor.
    pub async fn temperature(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new("chasEntTemperatureTable")
            .objects([
                "chasEntTempCurrent",
                "chasEntTempThreshold",
                "chasEntTempDangerThreshold",
                "chasEntTempStatus",
            ])
            .function("chassisSlotWithType_entPhysicalIndex")
            .object("index");
        self.query(query, limit).await
    }

    /// Control modules, loaded microcode and virtual chassis versions.
    pub async fn software(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new(
            "chasControlModuleTable|systemMicrocodeLoadedTable|systemVcHardwareTable",
        )
        .table_objects(
            "chasControlModuleTable",
            [
                "entPhysicalIndex",
                "chasPrimaryPhysicalIndex",
                "chasControlCurrentRunningVersion",
                "chasEntPhysAdminStatus",
                "chasEntPhysOperStatus",
                "chasControlDelayedRebootTimer",
                "chasEntPhysPower",
                "chasNumberOfResets",
            ],
        )
        .table_objects(
            "systemMicrocodeLoadedTable",
            ["systemMicrocodeLoadedDirectory", "systemMicrocodeLoadedVersion"],
        )
        .table_objects(
            "systemVcHardwareTable",
            [
                "virtualChassisOperChasId",
                "systemVcHardwareFpga1Version",
                "systemVcHardwareUbootVersion",
            ],
        )
        .function(
            "entPhysIndexModuleType|chassis_entPhysIndex|entPhysicalIndex_chassisId|chassisSlotWithType_entPhysicalIndex",
        )
        .object("index|index|chassis_entPhysIndex_1|index");
        self.query(query, limit).await
    }

    /// Model, part number and status of the CMM modules.
    pub async fn cmm_hardware_info(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new("entPhysicalTable")
            .objects([
                "entPhysicalIndex",
                "chasEntPhysOperStatus",
                "entPhysicalModelName",
                "chasEntPhysPartNumber",
                "entPhysicalDescr",
                "entPhysicalHardwareRev",
                "entPhysicalSerialNum",
                "entPhysicalMfgName",
            ])
            .function("entPhysIndexModuleType|chassisSlotWithType_entPhysicalIndex")
            .object("index|index")
            .filter("entPhysIndexModuleType_0", "==", "CMM");
        self.query(query, limit).await
    }

    /// Inventory and PoE firmware of the NI modules.
    pub async fn slot(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new("entPhysicalTable|alaPethMainPseTable")
            .table_objects(
                "entPhysicalTable",
                [
                    "entPhysicalIndex",
                    "entPhysicalClass",
                    "chasEntPhysModuleType",
                    "entPhysicalModelName",
                    "chasEntPhysPartNumber",
                    "chasEntPhysAdminStatus",
                    "chasEntPhysOperStatus",
                    "chasControlReloadStatus",
                    "chasEntPhysPower",
                    "entPhysicalDescr",
                    "chasEntPhysUbootRev",
                    "chasEntPhysDaughterFpga1Rev",
                    "entPhysicalHardwareRev",
                    "entPhysicalFirmwareRev",
                    "chasEntPhysDaughterFpga2Rev",
                    "entPhysicalSerialNum",
                    "entPhysicalMfgName",
                    "chasEntPhysMacAddress",
                ],
            )
            .table_objects(
                "alaPethMainPseTable",
                [
                    "alaPethMainPsePoESoftwareVersion",
                    "alaPethMainPsePoEHardwareVersion",
                ],
            )
            .function(
                "entPhysIndexModuleType|chassisSlot_entPhysicalIndex|chassisEntSlotArr_entPhysIndex|wvGetVCMode",
            )
            .object("index|entPhysicalIndex|entPhysicalIndex")
            .filter("entPhysIndexModuleType_0", "==", "NI");
        self.query(query, limit).await
    }

    /// Power supply type, output and status.
    pub async fn power_supplies(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new("entPhysicalTable")
            .objects([
                "entPhysicalIndex",
                "chasEntPhysPower",
                "chasEntPhysPowerType",
                "chasEntPhysOperStatus",
                "chasEntPhysAirflow",
            ])
            .function("entPhysIndexModuleType|chassisSlot_entPhysicalIndex")
            .object("index|entPhysicalIndex")
            .filter("entPhysIndexModuleType_0", "==", "PS");
        self.query(query, limit).await
    }

    /// PoE controller settings and firmware status.
    pub async fn poe_power(&mut self, limit: u32) -> Result<ApiResult> {
        let query = MibQuery::new("alaPethMainPseTable")
            .objects([
                "pethMainPseGroupIndex",
                "alaPethMainPseAdminStatus",
                "alaPethMainPseMaxPower",
                "alaPethMainPsePriorityDisconnect",
                "alaPethMainPseClassDetection",
                "pethMainPseUsageThreshold",
                "alaPethMainPseFastPoE",
                "alaPethMainPsePerpetualPoE",
                "alaPethMainPseHighResistanceDetection",
                "alaPethMainPseFirmwareUpgradeSWVersion",
                "alaPethMainPseFirmwareUpgradeStatus",
                "alaPethMainPseDelayTime",
            ])
            .function("chassisSlot_vcSlotNum")
            .object("pethMainPseGroupIndex");
        self.query(query, limit).await
    }
}

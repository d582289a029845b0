/// Test fixtures: representative RDB payloads from the NWIS peak and
/// daily-value services, trimmed to the lines the parsers care about.
///
/// Peak service (`https://nwis.waterdata.usgs.gov/nwis/peak?...&format=rdb`):
///   agency_cd  site_no  peak_dt  peak_tm  peak_va  peak_cd  gage_ht ...
///   peak_va (index 4) is the annual peak discharge, whole cfs.
///
/// Daily-value service (`https://waterservices.usgs.gov/nwis/dv/?format=rdb&...`):
///   agency_cd  site_no  datetime  <ts>_00060_00003  <ts>_00060_00003_cd
///   the mean discharge (index 3) is decimal.

/// Peoria pool peak record. 1986 appears twice (two peaks in one water
/// year) and 2019 has no discharge value.
pub const PEAK_RDB_PEORIA: &str = "#
# U.S. Geological Survey
# National Water Information System
#
# This file contains the annual peak streamflow data.
#
#  agency_cd     Agency Code
#  site_no       USGS station number
#  peak_dt       Date of peak streamflow (format YYYY-MM-DD)
#  peak_tm       Time of peak streamflow (24 hour format, 00:00 - 23:59)
#  peak_va       Annual peak streamflow value in cfs
#  peak_cd       Peak Discharge-Qualification codes
#  gage_ht       Gage height for the associated peak streamflow in feet
#
# Sites in this file include:
#  USGS 05567500 ILLINOIS RIVER AT PEORIA, IL
#
agency_cd\tsite_no\tpeak_dt\tpeak_tm\tpeak_va\tpeak_cd\tgage_ht\tgage_ht_cd
5s\t15s\t10d\t6s\t8s\t33s\t8s\t27s
USGS\t05567500\t1982-12-04\t\t44800\t\t20.21\t
USGS\t05567500\t1986-10-04\t\t35300\t\t19.61\t
USGS\t05567500\t1986-03-01\t\t12000\t\t15.02\t
USGS\t05567500\t2013-04-18\t07:45\t28700\t\t18.79\t
USGS\t05567500\t2015-12-29\t10:30\t31400\t\t19.09\t
USGS\t05567500\t2019-05-02\t\t\t\t17.65\t
";

/// One day of daily values for a year the peak record does not cover yet.
pub const DV_RDB_CURRENT_YEAR: &str = "# ---------------------------------- WARNING ----------------------------------------
# Some of the data that you have obtained from this U.S. Geological Survey database
# may not have received Director's approval.
#
# Data for the following 1 site(s) are contained in this file
#    USGS 05567500 ILLINOIS RIVER AT PEORIA, IL
#
# Data provided for site 05567500
#            TS   parameter     statistic     Description
#        150036       00060     00003     Discharge, cubic feet per second (Mean)
#
agency_cd\tsite_no\tdatetime\t150036_00060_00003\t150036_00060_00003_cd
5s\t15s\t20d\t14n\t10s
USGS\t05567500\t2024-05-01\t42300.5\tP
";

/// Daily value for a year the peak record acknowledges without a value.
pub const DV_RDB_ACKNOWLEDGED_YEAR: &str = "#
# Data provided for site 05567500
#
agency_cd\tsite_no\tdatetime\t150036_00060_00003\t150036_00060_00003_cd
5s\t15s\t20d\t14n\t10s
USGS\t05567500\t2019-05-02\t18800\tA
";

/// Body NWIS returns with status 200 when a site has no data.
pub const RDB_NO_SITES: &str = "#  No sites found matching all criteria
";

//! Static bodies of the category documents.
//!
//! Every `python` block here must pass the syntax check run by `ignref validate`.

pub const GATEWAY_SCRIPTS_BODY: &str = r#"## Script Parameters

```params
project: default
script_types: timer,tag_change,startup,shutdown,message
execution_context: gateway
```

## Check Gateway Scripts

```python
#!/usr/bin/env python
import os
import json
import glob

def find_gateway_scripts():
    '''Find all gateway event scripts'''
    ignition_root = r"C:\Program Files\Inductive Automation\Ignition"
    scripts_found = {}

    script_types = {
        "timer": "Timer Scripts (scheduled execution)",
        "tag-change": "Tag Change Scripts",
        "startup": "Gateway Startup Script",
        "shutdown": "Gateway Shutdown Script",
        "message": "Message Handler Scripts"
    }

    projects_dir = os.path.join(ignition_root, "data", "projects")

    for project in os.listdir(projects_dir):
        project_path = os.path.join(projects_dir, project)
        scripts_dir = os.path.join(project_path, "ignition", "gateway-scripts")

        if os.path.exists(scripts_dir):
            print(f"\nProject: {project}")
            for script_type, description in script_types.items():
                type_path = os.path.join(scripts_dir, script_type)
                if os.path.exists(type_path):
                    files = glob.glob(os.path.join(type_path, "*.json"))
                    if files:
                        print(f"  [OK] {description}: {len(files)} scripts")
                        scripts_found[f"{project}/{script_type}"] = files

    return scripts_found

if __name__ == "__main__":
    scripts = find_gateway_scripts()
    print(f"\nTotal script locations: {len(scripts)}")
```

## Documentation Links
- [Gateway Event Scripts](https://docs.inductiveautomation.com/docs/8.3/gateway-event-scripts)
- [Scripting](https://docs.inductiveautomation.com/docs/8.3/scripting)
"#;

pub const DEVICE_CONNECTIONS_PARAMS: &str = r#"## Device Parameters

```params
scan_rate: 1000
timeout: 5000
max_connections: 10
reconnect_delay: 30000
```
"#;

pub const DEVICE_CONNECTIONS_BODY: &str = r#"## OPC UA Connection Template

```python
def configure_opcua_device():
    '''Configure OPC UA device connection'''
    device = {
        "name": "OPC_UA_Server",
        "driver": "OPC-UA",
        "enabled": True,
        "settings": {
            "endpoint": "opc.tcp://localhost:4840",
            "security_policy": "None",
            "message_mode": "SignAndEncrypt",
            "username": "",
            "password": "",
            "connection_timeout": 5000,
            "request_timeout": 5000
        }
    }
    return device
```

## Modbus TCP Configuration

```python
def configure_modbus_tcp():
    '''Configure Modbus TCP device'''
    device = {
        "name": "Modbus_PLC",
        "driver": "Modbus TCP",
        "enabled": True,
        "settings": {
            "hostname": "192.168.1.100",
            "port": 502,
            "unit_id": 1,
            "timeout": 3000,
            "reconnect_after": 10000,
            "max_holding_registers": 125,
            "max_input_registers": 125,
            "reverse_word_order": False
        }
    }
    return device
```

## Documentation Links
- [Device Connections](https://docs.inductiveautomation.com/docs/8.3/device-connections)
- [OPC UA Configuration](https://docs.inductiveautomation.com/docs/8.3/opc-ua)
- [Modbus Driver](https://docs.inductiveautomation.com/docs/8.3/modbus-driver)
"#;

pub const TRANSACTION_GROUPS: &str = r#"# Transaction Group Configurations

## Transaction Parameters

```params
execution_rate: 1000
trigger_mode: timer
store_mode: insert_rows
table_name: production_data
```

## Transaction Group Types

### Standard Group
```python
def create_standard_group():
    '''Create standard transaction group'''
    group = {
        "name": "Production_Logging",
        "enabled": True,
        "mode": "Standard",
        "rate": 60000,  # 1 minute
        "table": "production_log",
        "database": "default",
        "items": [
            {"name": "timestamp", "type": "timestamp"},
            {"name": "machine_id", "source": "[default]Machine/ID"},
            {"name": "production_count", "source": "[default]Machine/Count"},
            {"name": "efficiency", "source": "[default]Machine/OEE"}
        ]
    }
    return group
```

### Block Group
```python
def create_block_group():
    '''Create block transaction group'''
    group = {
        "name": "Machine_Status_Block",
        "enabled": True,
        "mode": "Block",
        "rate": 5000,  # 5 seconds
        "block_size": 10,
        "table": "machine_status",
        "items": [
            {"name": "block_timestamp", "type": "timestamp"},
            {"name": "values", "source": "[default]Machine/Status/*"}
        ]
    }
    return group
```

### Historical Group
```python
def create_historical_group():
    '''Create historical transaction group'''
    group = {
        "name": "Historical_Trending",
        "enabled": True,
        "mode": "Historical",
        "rate": 10000,  # 10 seconds
        "table": "historical_data",
        "handshake": {
            "enabled": True,
            "tag": "[default]Trigger/DataReady",
            "reset_value": 0
        }
    }
    return group
```

## Documentation Links
- [Transaction Groups](https://docs.inductiveautomation.com/docs/8.3/transaction-groups)
"#;

pub const ALARM_PROFILES: &str = r#"# Alarm Notification Profiles

## Notification Parameters

```params
escalation_delay: 300
max_retries: 3
acknowledgment_required: true
consolidation_enabled: true
```

## Email Notification Profile

```python
def create_email_profile():
    '''Create email notification profile'''
    profile = {
        "name": "Critical_Alerts_Email",
        "type": "email",
        "enabled": True,
        "settings": {
            "smtp_server": "smtp.company.com",
            "port": 587,
            "use_tls": True,
            "username": "ignition@company.com",
            "from_address": "ignition@company.com",
            "subject_template": "ALERT: {displayPath} - {name}",
            "body_template": '''
                Alarm: {name}
                Priority: {priority}
                State: {eventState}
                Time: {eventTime}
                Value: {eventValue}
                Notes: {notes}
            '''
        }
    }
    return profile
```

## SMS Notification Profile

```python
def create_sms_profile():
    '''Create SMS notification profile'''
    profile = {
        "name": "Critical_Alerts_SMS",
        "type": "sms",
        "enabled": True,
        "settings": {
            "gateway": "Twilio",
            "account_sid": "AC...",
            "auth_token": "{encrypted}",
            "from_number": "+1234567890",
            "message_template": "{priority}: {displayPath} - {eventState}"
        }
    }
    return profile
```

## Voice Notification Profile

```python
def create_voice_profile():
    '''Create voice notification profile'''
    profile = {
        "name": "Emergency_Voice",
        "type": "voice",
        "enabled": True,
        "settings": {
            "gateway": "Twilio",
            "account_sid": "AC...",
            "auth_token": "{encrypted}",
            "from_number": "+1234567890",
            "message": "Critical alarm on {displayPath}. Press 1 to acknowledge."
        }
    }
    return profile
```

## Roster Management

```python
def create_alarm_roster():
    '''Create alarm notification roster'''
    roster = {
        "name": "Operations_Team",
        "users": [
            {
                "username": "operator1",
                "contact_type": "email",
                "contact": "operator1@company.com",
                "schedule": "always"
            },
            {
                "username": "supervisor",
                "contact_type": "sms",
                "contact": "+1234567890",
                "schedule": "business_hours"
            },
            {
                "username": "manager",
                "contact_type": "voice",
                "contact": "+0987654321",
                "schedule": "on_call"
            }
        ],
        "schedules": {
            "business_hours": "weekdays 8am-5pm",
            "on_call": "weekends and after hours",
            "always": "24/7"
        }
    }
    return roster
```

## Documentation Links
- [Alarm Notification](https://docs.inductiveautomation.com/docs/8.3/alarm-notification)
- [Notification Profiles](https://docs.inductiveautomation.com/docs/8.3/alarm-notification/notification-profiles)
"#;
